//! The canonical, provider-agnostic job record.

use chrono::{DateTime, Utc};
use jobmap_core::MapCenter;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "£";

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `None` unless both values are finite and inside the valid
    /// latitude/longitude ranges.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

impl From<Coordinates> for MapCenter {
    fn from(c: Coordinates) -> Self {
        MapCenter {
            lat: c.latitude,
            lng: c.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategory {
    pub label: String,
}

/// Contact details the provider attaches to some postings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMetadata {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub maps_url: Option<String>,
}

impl CompanyMetadata {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.phone.is_none()
            && self.website.is_none()
            && self.maps_url.is_none()
    }
}

/// A normalized job posting.
///
/// `id` is only unique within one search. `search_location` records which of
/// the requested locations produced the posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company_name: String,
    /// May contain HTML markup from the upstream job board.
    pub description: String,
    pub location_text: String,
    pub coordinates: Option<Coordinates>,
    pub distance_km: Option<f64>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub currency: String,
    pub contract_type: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<JobCategory>,
    pub created_at: Option<DateTime<Utc>>,
    pub source_api: String,
    pub search_location: String,
    pub redirect_url: Option<String>,
    pub company_metadata: Option<CompanyMetadata>,
}

impl Job {
    /// Formats the salary range for display.
    ///
    /// ```
    /// # use jobmap_search::Job;
    /// # let job: Job = serde_json::from_value(serde_json::json!({
    /// #     "id": "1", "title": "t", "company_name": "c", "description": "d",
    /// #     "location_text": "l", "coordinates": null, "distance_km": null,
    /// #     "salary_min": 30000.0, "salary_max": 45000.0, "currency": "£",
    /// #     "contract_type": null, "job_type": null, "category": null,
    /// #     "created_at": null, "source_api": "Adzuna", "search_location": "London",
    /// #     "redirect_url": null, "company_metadata": null
    /// # })).unwrap();
    /// assert_eq!(job.salary_display(), "£30000 - £45000");
    /// ```
    #[must_use]
    pub fn salary_display(&self) -> String {
        format_salary(self.salary_min, self.salary_max, &self.currency)
    }
}

/// Formats an optional salary range with the given currency symbol.
#[must_use]
pub fn format_salary(min: Option<f64>, max: Option<f64>, currency: &str) -> String {
    match (min, max) {
        (None, None) => "not specified".to_string(),
        (None, Some(max)) => format!("Up to {currency}{max}"),
        (Some(min), None) => format!("From {currency}{min}"),
        (Some(min), Some(max)) => format!("{currency}{min} - {currency}{max}"),
    }
}
