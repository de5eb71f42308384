use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// `None` when `YELP_API_KEY` is unset or blank. Only a collect run needs it.
    pub yelp_api_key: Option<String>,
    pub api_base_url: String,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Wait after each business, whether or not its detail fetch succeeded.
    pub business_delay_ms: u64,
    /// Wait after each city once all of its businesses are processed.
    pub city_delay_ms: u64,
    pub cities: Vec<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "yelp_api_key",
                &self.yelp_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("api_base_url", &self.api_base_url)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("business_delay_ms", &self.business_delay_ms)
            .field("city_delay_ms", &self.city_delay_ms)
            .field("cities", &self.cities)
            .finish()
    }
}
