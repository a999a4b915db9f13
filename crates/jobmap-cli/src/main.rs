mod filters;
mod save;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobmap_core::Environment;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobmap")]
#[command(about = "Search job listings around one or more locations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every location and print the merged listings
    Search {
        /// Location to search around; repeat for several locations
        #[arg(short, long = "location", required = true)]
        locations: Vec<String>,
        /// Search radius in kilometres (defaults to `JOBMAP_DEFAULT_RADIUS_KM`)
        #[arg(short, long)]
        radius: Option<f64>,
        /// Category filter (e.g., "IT Jobs"); repeatable
        #[arg(short, long = "category")]
        categories: Vec<String>,
        /// Job-type filter (e.g., `full_time`); repeatable
        #[arg(short = 't', long = "job-type")]
        job_types: Vec<String>,
        /// Print the outcome as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the categories and job types the provider offers
    Filters {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save a job (as emitted by `search --json`) through the provider
    Save {
        /// Path to a JSON file holding one job
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = jobmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(colored_logs(&config.env))
        .init();
    tracing::debug!(env = %config.env, api_url = %config.api_url, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            locations,
            radius,
            categories,
            job_types,
            json,
        }) => {
            let args = search::SearchArgs {
                locations,
                radius_km: radius,
                categories,
                job_types,
                json,
            };
            search::run_search(&config, args).await?;
        }
        Some(Commands::Filters { json }) => filters::run_filters(&config, json).await?,
        Some(Commands::Save { path }) => save::run_save(&config, &path).await?,
        None => println!("jobmap: run `jobmap --help` for available commands"),
    }

    Ok(())
}

/// ANSI colors everywhere except production.
fn colored_logs(env: &Environment) -> bool {
    !matches!(env, Environment::Production)
}
