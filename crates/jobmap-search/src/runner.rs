//! Runs the provider query for one location and classifies the outcome.

use std::fmt;

use serde::Serialize;

use crate::client::JobProvider;
use crate::filters::FilterParam;
use crate::geo::haversine_km;
use crate::job::{Coordinates, Job};
use crate::normalize::{coordinates_from_value, normalize_job};

/// Why one location's query produced no jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFailure {
    pub location: String,
    pub reason: String,
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.reason)
    }
}

/// Jobs found around one location, plus what the provider resolved it to.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationResult {
    /// The location exactly as requested.
    pub location: String,
    pub jobs: Vec<Job>,
    /// Display text for the searched area; the requested text when the
    /// provider did not resolve one.
    pub search_area: String,
    /// Geocode of the location, when the provider supplied one.
    pub center: Option<Coordinates>,
}

/// Queries `provider` once for `location` and normalizes the results.
///
/// Every job is tagged with `search_location = location`. An empty result
/// list is a success. Transport errors, non-2xx statuses, and
/// provider-reported errors all become a [`SearchFailure`]; no retries.
///
/// # Errors
///
/// Returns [`SearchFailure`] when the location could not be searched.
pub async fn run_location_query<P: JobProvider>(
    provider: &P,
    location: &str,
    radius_km: f64,
    filters: &[FilterParam],
) -> Result<LocationResult, SearchFailure> {
    let fail = |reason: String| SearchFailure {
        location: location.to_owned(),
        reason,
    };

    let response = provider
        .search(location, radius_km, filters)
        .await
        .map_err(|e| fail(e.reason()))?;

    if let Some(message) = response.error_message() {
        return Err(fail(message));
    }

    let center = response
        .coordinates
        .as_ref()
        .and_then(coordinates_from_value);
    let search_area = response
        .area_name()
        .unwrap_or_else(|| location.to_owned());

    let jobs: Vec<Job> = response
        .into_results()
        .iter()
        .enumerate()
        .map(|(position, raw)| {
            let mut job = normalize_job(raw, location, position);
            if let (None, Some(center), Some(at)) = (job.distance_km, center, job.coordinates) {
                job.distance_km = Some(haversine_km(center, at));
            }
            job
        })
        .collect();

    tracing::debug!(location, jobs = jobs.len(), %search_area, "location query succeeded");

    Ok(LocationResult {
        location: location.to_owned(),
        jobs,
        search_area,
        center,
    })
}
