//! `search` command: run a multi-location search and print the outcome.

use jobmap_core::AppConfig;
use jobmap_search::{
    format_job_type, FilterSelection, Job, JobProviderClient, SearchOutcome, SearchRequest,
    SearchSession, SearchStatus,
};

/// Parsed `search` arguments.
#[derive(Debug)]
pub(crate) struct SearchArgs {
    pub locations: Vec<String>,
    pub radius_km: Option<f64>,
    pub categories: Vec<String>,
    pub job_types: Vec<String>,
    pub json: bool,
}

/// Builds the request from `args`, runs it, and prints the merged listings.
///
/// Per-location failures are printed after the listings and do not fail the
/// command unless every location failed.
///
/// # Errors
///
/// Returns an error if the request is invalid, the client cannot be built,
/// output cannot be serialized, or every location failed.
pub(crate) async fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let client = JobProviderClient::from_config(config)?;
    let filters = FilterSelection::from_lists(args.categories, args.job_types);
    let request =
        SearchRequest::new(&args.locations, args.radius_km.unwrap_or(config.default_radius_km))?
            .with_filters(filters);

    let session = SearchSession::new(config.default_center, config.max_concurrent_locations);
    let Some(outcome) = session.search(&client, &request).await else {
        anyhow::bail!("search was superseded before it finished");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    if outcome.status() == SearchStatus::Failed {
        anyhow::bail!(
            "search failed: {}",
            outcome.error.as_deref().unwrap_or("no location could be searched")
        );
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    println!(
        "searched {} (map center {})",
        outcome.search_areas.join("; "),
        outcome.center
    );

    if outcome.jobs.is_empty() {
        println!("no jobs found");
    } else {
        println!(
            "{:<16}{:<36}{:<26}{:<10}{:<14}SALARY",
            "LOCATION", "TITLE", "COMPANY", "DIST KM", "TYPE"
        );
        for job in &outcome.jobs {
            print_job_row(job);
        }
        println!("{} jobs", outcome.jobs.len());
    }

    for failure in &outcome.failures {
        eprintln!("warning: {failure}");
    }
}

fn print_job_row(job: &Job) {
    let distance = job
        .distance_km
        .map_or_else(|| "-".to_string(), |d| format!("{d:.1}"));
    let job_type = job
        .job_type
        .as_deref()
        .map_or_else(|| "-".to_string(), format_job_type);
    println!(
        "{:<16}{:<36}{:<26}{:<10}{:<14}{}",
        truncate(&job.search_location, 15),
        truncate(&job.title, 35),
        truncate(&job.company_name, 25),
        distance,
        job_type,
        job.salary_display()
    );
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
