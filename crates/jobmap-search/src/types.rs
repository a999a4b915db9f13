//! Job-search provider response types.
//!
//! Individual job records are kept as raw [`serde_json::Value`]s because the
//! provider merges several upstream job boards and the per-record shape varies
//! between them. [`crate::normalize`] turns each one into a [`crate::Job`].

use serde::Deserialize;
use serde_json::Value;

/// Envelope returned by `GET /api/jobs`.
///
/// Only `results` is strictly typed. The remaining fields are informational
/// and kept as raw values so an odd shape never fails the whole response.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub total: Option<Value>,
    /// Raw job records. The provider sends `null` instead of `[]` on some paths.
    #[serde(default)]
    pub results: Option<Vec<Value>>,
    /// Present when the provider accepted the request but could not serve it.
    #[serde(default)]
    pub error: Option<Value>,
    /// Geocode of the queried location, when the provider resolved one.
    #[serde(default)]
    pub coordinates: Option<Value>,
    /// Human-readable name of the resolved search area.
    #[serde(default)]
    pub search_area: Option<Value>,
    /// Geocoder's name for the area; read when `search_area` is absent.
    #[serde(default)]
    pub formatted_address: Option<Value>,
}

impl JobSearchResponse {
    /// Returns the provider-reported error message, if any.
    ///
    /// A blank string or `false` counts as no error, matching how the
    /// provider's web client treats the field.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Reported result count, accepting integral floats such as `2.0`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_cmp
    )]
    pub fn total_count(&self) -> Option<u64> {
        let total = self.total.as_ref()?;
        total.as_u64().or_else(|| {
            total
                .as_f64()
                .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0)
                .map(|n| n as u64)
        })
    }

    /// Resolved area name: the first non-blank of `search_area` and
    /// `formatted_address`.
    #[must_use]
    pub fn area_name(&self) -> Option<String> {
        [&self.search_area, &self.formatted_address]
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_owned)
    }

    /// Takes ownership of the raw job list, treating a missing list as empty.
    #[must_use]
    pub fn into_results(self) -> Vec<Value> {
        self.results.unwrap_or_default()
    }
}
