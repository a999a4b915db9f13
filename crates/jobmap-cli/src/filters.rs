//! `filters` command: show the provider's category and job-type options.

use jobmap_core::AppConfig;
use jobmap_search::{format_job_type, JobProviderClient};

/// Fetches the filter catalog and prints it.
///
/// Lists the provider cannot serve are replaced by the built-in defaults, so
/// this only fails before any request is made.
///
/// # Errors
///
/// Returns an error if the client cannot be built or JSON output fails.
pub(crate) async fn run_filters(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let client = JobProviderClient::from_config(config)?;
    let catalog = client.fetch_filter_catalog().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("CATEGORIES");
    for category in &catalog.categories {
        println!("  {category}");
    }
    println!();
    println!("JOB TYPES");
    for job_type in &catalog.job_types {
        println!("  {:<14}{}", job_type, format_job_type(job_type));
    }
    Ok(())
}
