use crate::app_config::AppConfig;
use crate::ConfigError;

/// Cities searched when `TRUCKSCAN_CITIES` is not set, in collection order.
pub const DEFAULT_CITIES: [&str; 9] = [
    "Laredo, TX",
    "Brownsville, TX",
    "McAllen, TX",
    "El Paso, TX",
    "Eagle Pass, TX",
    "Del Rio, TX",
    "Harlingen, TX",
    "Mission, TX",
    "Pharr, TX",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation are decoupled from the process environment so they
/// can be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let yelp_api_key = lookup("YELP_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());

    let api_base_url = or_default("TRUCKSCAN_API_BASE_URL", "https://api.yelp.com/v3");
    let output_dir = PathBuf::from(or_default("TRUCKSCAN_OUTPUT_DIR", "."));
    let log_level = or_default("TRUCKSCAN_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("TRUCKSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRUCKSCAN_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("TRUCKSCAN_USER_AGENT", "truckscan/0.1 (food-truck-listings)");
    let business_delay_ms = parse_u64("TRUCKSCAN_BUSINESS_DELAY_MS", "200")?;
    let city_delay_ms = parse_u64("TRUCKSCAN_CITY_DELAY_MS", "1000")?;

    let cities = match lookup("TRUCKSCAN_CITIES") {
        Ok(raw) => parse_cities(&raw)?,
        Err(_) => DEFAULT_CITIES.iter().map(|c| (*c).to_string()).collect(),
    };

    Ok(AppConfig {
        yelp_api_key,
        api_base_url,
        output_dir,
        log_level,
        request_timeout_secs,
        user_agent,
        business_delay_ms,
        city_delay_ms,
        cities,
    })
}

/// Split a `;`-separated city list, trimming entries and dropping blanks.
///
/// Order is preserved; it determines collection and output order.
fn parse_cities(raw: &str) -> Result<Vec<String>, ConfigError> {
    let cities: Vec<String> = raw
        .split(';')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if cities.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRUCKSCAN_CITIES".to_string(),
            reason: "no cities listed".to_string(),
        });
    }
    Ok(cities)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
