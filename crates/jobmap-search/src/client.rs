//! HTTP client for the job-search provider.
//!
//! Wraps `reqwest` with provider-specific URL building, status handling, and
//! typed response deserialization. A non-2xx status is surfaced as
//! [`ProviderError::UnexpectedStatus`]; a 2xx payload carrying an `error`
//! field is returned as-is so the caller can classify it.

use std::future::Future;
use std::time::Duration;

use jobmap_core::AppConfig;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ProviderError;
use crate::filters::{
    fallback_categories, fallback_job_types, normalize_job_types, parse_catalog_list,
    FilterCatalog, FilterParam,
};
use crate::job::Job;
use crate::types::JobSearchResponse;

/// The single provider operation the search engine depends on.
///
/// Implemented by [`JobProviderClient`]; tests substitute in-memory providers.
pub trait JobProvider: Sync {
    /// Queries jobs around one location.
    fn search(
        &self,
        location: &str,
        radius_km: f64,
        filters: &[FilterParam],
    ) -> impl Future<Output = Result<JobSearchResponse, ProviderError>> + Send;
}

/// Client for the provider's `/api/*` endpoints.
///
/// Use [`JobProviderClient::from_config`] in binaries or
/// [`JobProviderClient::new`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct JobProviderClient {
    client: Client,
    base_url: Url,
}

impl JobProviderClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProviderError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Keep exactly one trailing slash so `Url::join` appends to the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ProviderError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Creates a client from the application config.
    ///
    /// # Errors
    ///
    /// See [`JobProviderClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        Self::new(
            &config.api_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Calls `GET /api/jobs` for one location.
    ///
    /// The radius is sent as whole kilometres (at least 1).
    ///
    /// # Errors
    ///
    /// - [`ProviderError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ProviderError::Http`] on network failure or timeout.
    /// - [`ProviderError::Deserialize`] if the body is not the expected JSON.
    pub async fn search_jobs(
        &self,
        location: &str,
        radius_km: f64,
        filters: &[FilterParam],
    ) -> Result<JobSearchResponse, ProviderError> {
        let radius = radius_param(radius_km);
        let mut params: Vec<(&str, &str)> = vec![("location", location), ("radius", radius.as_str())];
        params.extend(filters.iter().map(|(k, v)| (*k, v.as_str())));

        let url = self.endpoint_url("api/jobs", &params)?;
        tracing::debug!(%url, "querying job provider");

        let body = self.get_json(&url).await?;
        serde_json::from_value(body).map_err(|e| ProviderError::Deserialize {
            context: format!("jobs(location={location})"),
            source: e,
        })
    }

    /// Fetches the category catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, non-2xx status, or an
    /// unrecognized payload shape.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, ProviderError> {
        let url = self.endpoint_url("api/categories", &[])?;
        let body = self.get_json(&url).await?;
        parse_catalog_list(&body, "categories")
    }

    /// Fetches the job-type catalog, lower-cased and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, non-2xx status, or an
    /// unrecognized payload shape.
    pub async fn fetch_job_types(&self) -> Result<Vec<String>, ProviderError> {
        let url = self.endpoint_url("api/job_types", &[])?;
        let body = self.get_json(&url).await?;
        parse_catalog_list(&body, "job_types").map(normalize_job_types)
    }

    /// Fetches both catalogs, substituting the built-in defaults for any list
    /// the provider fails to serve.
    pub async fn fetch_filter_catalog(&self) -> FilterCatalog {
        let (categories, job_types) = tokio::join!(self.fetch_categories(), self.fetch_job_types());

        let categories = categories.unwrap_or_else(|error| {
            tracing::warn!(%error, "could not load categories; using defaults");
            fallback_categories()
        });
        let job_types = job_types.unwrap_or_else(|error| {
            tracing::warn!(%error, "could not load job types; using defaults");
            fallback_job_types()
        });

        FilterCatalog {
            categories,
            job_types,
        }
    }

    /// Posts a job to `POST /api/save`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ProviderError::Http`] on network failure.
    pub async fn save_job(&self, job: &Job) -> Result<(), ProviderError> {
        let url = self.endpoint_url("api/save", &[])?;
        let response = self.client.post(url.clone()).json(job).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        tracing::debug!(job_id = %job.id, "job saved");
        Ok(())
    }

    /// Joins `path` onto the base URL and appends percent-encoded query pairs.
    fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ProviderError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ProviderError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, requires a 2xx status, and parses the body as JSON.
    async fn get_json(&self, url: &Url) -> Result<Value, ProviderError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

impl JobProvider for JobProviderClient {
    async fn search(
        &self,
        location: &str,
        radius_km: f64,
        filters: &[FilterParam],
    ) -> Result<JobSearchResponse, ProviderError> {
        self.search_jobs(location, radius_km, filters).await
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn radius_param(radius_km: f64) -> String {
    let whole = if radius_km.is_finite() {
        radius_km.round().max(1.0) as u64
    } else {
        1
    };
    whole.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
