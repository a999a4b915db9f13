use std::path::Path;

use anyhow::Context;
use jobmap_core::AppConfig;
use jobmap_search::{Job, JobProviderClient};

/// Reads one job from `path` and submits it to the provider's save endpoint.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the provider
/// rejects the save.
pub(crate) async fn run_save(config: &AppConfig, path: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let job: Job = serde_json::from_str(&raw)
        .with_context(|| format!("{} does not contain a job", path.display()))?;

    let client = JobProviderClient::from_config(config)?;
    if let Err(err) = client.save_job(&job).await {
        tracing::debug!(error = %err, "save request failed");
        anyhow::bail!("failed to save job {}: {}", job.id, err.reason());
    }

    tracing::info!(id = %job.id, title = %job.title, "job saved");
    println!("saved job {} ({})", job.id, job.title);
    Ok(())
}
