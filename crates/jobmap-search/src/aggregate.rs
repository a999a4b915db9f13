//! Multi-location search: fan out one query per location, merge the results in
//! request order, and decide the overall outcome.

use futures::stream::{self, StreamExt};
use jobmap_core::MapCenter;
use serde::Serialize;

use crate::client::JobProvider;
use crate::error::RequestError;
use crate::filters::FilterSelection;
use crate::job::{Coordinates, Job};
use crate::runner::{run_location_query, LocationResult, SearchFailure};

/// One user submission: where to look, how far, and which filters apply.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    locations: Vec<String>,
    radius_km: f64,
    filters: FilterSelection,
}

impl SearchRequest {
    /// Validates and builds a request without filters.
    ///
    /// Locations are trimmed; order and duplicates are preserved.
    ///
    /// # Errors
    ///
    /// - [`RequestError::NoLocations`] if `locations` is empty.
    /// - [`RequestError::BlankLocation`] if any location is blank.
    /// - [`RequestError::InvalidRadius`] unless `radius_km` is finite and positive.
    pub fn new<I, S>(locations: I, radius_km: f64) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let locations = locations
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let trimmed = raw.as_ref().trim();
                if trimmed.is_empty() {
                    Err(RequestError::BlankLocation { index })
                } else {
                    Ok(trimmed.to_owned())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if locations.is_empty() {
            return Err(RequestError::NoLocations);
        }
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(RequestError::InvalidRadius(radius_km));
        }

        Ok(Self {
            locations,
            radius_km,
            filters: FilterSelection::default(),
        })
    }

    #[must_use]
    pub fn with_filters(mut self, filters: FilterSelection) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    #[must_use]
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }
}

/// Terminal state of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Succeeded,
    PartiallySucceeded,
    Failed,
}

/// Everything the presentation layer needs after a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Jobs from every successful location, grouped in request order.
    pub jobs: Vec<Job>,
    /// One entry per requested location, in request order.
    pub search_areas: Vec<String>,
    /// Geocode of each entry in `search_areas`, when the provider supplied one.
    pub search_area_centers: Vec<Option<Coordinates>>,
    pub center: MapCenter,
    /// Locations that could not be searched, in request order.
    pub failures: Vec<SearchFailure>,
    /// Set only when every location failed.
    pub error: Option<String>,
}

impl SearchOutcome {
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        if self.error.is_some() {
            SearchStatus::Failed
        } else if self.failures.is_empty() {
            SearchStatus::Succeeded
        } else {
            SearchStatus::PartiallySucceeded
        }
    }

    /// Jobs produced by the query for `location`.
    pub fn jobs_for<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a Job> + 'a {
        self.jobs
            .iter()
            .filter(move |job| job.search_location == location)
    }
}

/// Tuning for [`aggregate`].
#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions {
    /// Location queries allowed in flight at once. Values below 1 act as 1.
    pub max_concurrent: usize,
    /// Center to keep when the search yields nothing to re-center on.
    pub center: MapCenter,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            max_concurrent: 4,
            center: MapCenter::LONDON,
        }
    }
}

/// Runs `request` against `provider` and merges the per-location outcomes.
///
/// Locations are queried concurrently (bounded by
/// [`AggregateOptions::max_concurrent`]) but merged in request order: every
/// job from `locations[0]` precedes every job from `locations[1]`. One failed
/// location never discards the others. When all fail, `jobs` is empty and
/// `error` carries the first failure's reason in request order.
///
/// The new center is the first merged job's coordinates; if there is no such
/// job or it has no coordinates, `options.center` is kept.
pub async fn aggregate<P: JobProvider>(
    provider: &P,
    request: &SearchRequest,
    options: &AggregateOptions,
) -> SearchOutcome {
    let filters = request.filters().params();
    let radius_km = request.radius_km();

    tracing::info!(
        locations = request.locations().len(),
        radius_km,
        filters = filters.len(),
        "starting job search"
    );

    // `buffered` yields in input order regardless of completion order.
    let results: Vec<Result<LocationResult, SearchFailure>> = stream::iter(request.locations())
        .map(|location| run_location_query(provider, location, radius_km, &filters))
        .buffered(options.max_concurrent.max(1))
        .collect()
        .await;

    let outcome = merge_results(request.locations(), results, options.center);

    for failure in &outcome.failures {
        tracing::warn!(location = %failure.location, reason = %failure.reason, "location search failed");
    }
    tracing::info!(
        jobs = outcome.jobs.len(),
        failed = outcome.failures.len(),
        status = ?outcome.status(),
        "job search finished"
    );

    outcome
}

/// Folds per-location results (aligned with `locations`) into one outcome.
fn merge_results(
    locations: &[String],
    results: Vec<Result<LocationResult, SearchFailure>>,
    prior_center: MapCenter,
) -> SearchOutcome {
    let mut jobs = Vec::new();
    let mut search_areas = Vec::with_capacity(locations.len());
    let mut search_area_centers = Vec::with_capacity(locations.len());
    let mut failures = Vec::new();

    for (location, result) in locations.iter().zip(results) {
        match result {
            Ok(found) => {
                search_areas.push(found.search_area);
                search_area_centers.push(found.center);
                jobs.extend(found.jobs);
            }
            Err(failure) => {
                search_areas.push(location.clone());
                search_area_centers.push(None);
                failures.push(failure);
            }
        }
    }

    let error = if failures.len() == locations.len() {
        failures.first().map(|f| f.reason.clone())
    } else {
        None
    };

    let center = jobs
        .first()
        .and_then(|job| job.coordinates)
        .map_or(prior_center, MapCenter::from);

    SearchOutcome {
        jobs,
        search_areas,
        search_area_centers,
        center,
        failures,
        error,
    }
}
