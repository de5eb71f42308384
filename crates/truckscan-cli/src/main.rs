mod collect;
mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "truckscan")]
#[command(about = "Collect food truck listings from Yelp into a CSV file")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every city, fetch business details, and export a CSV
    Collect {
        /// Search this city instead of the configured list (repeatable)
        #[arg(long = "city")]
        cities: Vec<String>,

        /// Directory the CSV is written to (defaults to `TRUCKSCAN_OUTPUT_DIR`)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Print the cities that would be searched without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// List the cities a collect run would search, in order
    Cities,
}

/// Builds the log filter from a configured level, falling back to `info` when
/// the directive does not parse.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("invalid log level {level:?} ({e}); using info");
        EnvFilter::new("info")
    })
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = truckscan_core::load_app_config();
    let level = loaded.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter(level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            eprintln!("Error: failed to load configuration: {e}");
            return;
        }
    };

    let command = cli.command.unwrap_or(Commands::Collect {
        cities: Vec::new(),
        output_dir: None,
        dry_run: false,
    });

    match command {
        Commands::Collect {
            cities,
            output_dir,
            dry_run,
        } => {
            let cities = if cities.is_empty() {
                config.cities.clone()
            } else {
                cities
            };
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            if let Err(e) = collect::run_collect(&config, &cities, &output_dir, dry_run).await {
                tracing::error!(error = %format!("{e:#}"), "collect failed");
                eprintln!("Error: {e:#}");
            }
        }
        Commands::Cities => {
            for city in &config.cities {
                println!("{city}");
            }
        }
    }
}
