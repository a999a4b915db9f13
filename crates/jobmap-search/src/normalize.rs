//! Normalization from raw provider job records to [`Job`].
//!
//! The provider merges several upstream job boards, so the same field can
//! arrive as a string, an object, an array, or not at all. Every extraction
//! here walks a fallback chain that ends in a default; normalization never
//! fails.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::job::{CompanyMetadata, Coordinates, Job, JobCategory, DEFAULT_CURRENCY};

pub const UNTITLED_POSITION: &str = "Untitled Position";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const NO_DESCRIPTION: &str = "No description available";
pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Placeholder the provider uses for missing company contact details.
const NOT_AVAILABLE: &str = "N/A";

/// Converts one raw provider record into a [`Job`].
///
/// `position` is the record's index in the provider's result list and is only
/// used to synthesize an id when the provider did not supply one.
#[must_use]
pub fn normalize_job(raw: &Value, search_location: &str, position: usize) -> Job {
    let id = raw
        .get("id")
        .and_then(value_as_string)
        .unwrap_or_else(|| format!("{search_location}-{position}"));

    Job {
        id,
        title: text_field(raw, &["title"]).unwrap_or_else(|| UNTITLED_POSITION.to_string()),
        company_name: resolve_company(raw.get("company")),
        description: text_field(raw, &["description"])
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        location_text: resolve_location_text(raw.get("location")),
        coordinates: resolve_coordinates(raw),
        distance_km: number_field(raw, &["distance_km", "distance"]).filter(|d| *d >= 0.0),
        salary_min: number_field(raw, &["salary_min"]),
        salary_max: number_field(raw, &["salary_max"]),
        currency: text_field(raw, &["currency", "salary_currency"])
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        contract_type: text_field(raw, &["contract_type"]),
        job_type: text_field(raw, &["job_type", "contract_time"]),
        category: resolve_category(raw.get("category")),
        created_at: resolve_created_at(raw),
        source_api: text_field(raw, &["source_api", "source"])
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        search_location: search_location.to_string(),
        redirect_url: text_field(raw, &["redirect_url", "url"]),
        company_metadata: resolve_company_metadata(raw.get("company_metadata")),
    }
}

/// Company name: a plain string, else the object's `display_name`, else
/// [`UNKNOWN_COMPANY`].
fn resolve_company(company: Option<&Value>) -> String {
    let name = match company {
        Some(Value::String(name)) => non_blank(name),
        Some(Value::Object(map)) => map.get("display_name").and_then(value_as_text),
        _ => None,
    };
    name.unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

/// Location text: a plain string, else the first of `display_name`, `name`,
/// `address`, `area[0]`. A record with no location at all reads
/// [`LOCATION_NOT_SPECIFIED`]; one whose location carries none of the known
/// fields reads [`UNKNOWN_LOCATION`].
fn resolve_location_text(location: Option<&Value>) -> String {
    let resolved = match location {
        None | Some(Value::Null) => return LOCATION_NOT_SPECIFIED.to_string(),
        Some(Value::String(s)) => match non_blank(s) {
            Some(s) => Some(s),
            None => return LOCATION_NOT_SPECIFIED.to_string(),
        },
        Some(Value::Object(map)) => location_from_object(map),
        Some(Value::Array(area)) => first_text(area),
        Some(_) => None,
    };
    resolved.unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
}

fn location_from_object(map: &Map<String, Value>) -> Option<String> {
    ["display_name", "name", "address"]
        .iter()
        .find_map(|key| map.get(*key).and_then(value_as_text))
        .or_else(|| match map.get("area") {
            Some(Value::Array(area)) => first_text(area),
            _ => None,
        })
}

fn first_text(items: &[Value]) -> Option<String> {
    items.first().and_then(value_as_text)
}

/// Coordinates: an explicit `coordinates` object, else top-level
/// `latitude`/`longitude` scalars. Never invented.
fn resolve_coordinates(raw: &Value) -> Option<Coordinates> {
    raw.get("coordinates")
        .and_then(coordinates_from_value)
        .or_else(|| coordinates_from_value(raw))
}

/// Reads `latitude`/`longitude` (numbers or numeric strings) from an object.
pub(crate) fn coordinates_from_value(value: &Value) -> Option<Coordinates> {
    let latitude = value.get("latitude").and_then(value_as_f64)?;
    let longitude = value.get("longitude").and_then(value_as_f64)?;
    Coordinates::new(latitude, longitude)
}

fn resolve_category(category: Option<&Value>) -> Option<JobCategory> {
    let label = match category? {
        Value::Object(map) => map.get("label").and_then(value_as_text),
        other => value_as_text(other),
    }?;
    Some(JobCategory { label })
}

fn resolve_created_at(raw: &Value) -> Option<DateTime<Utc>> {
    let created = text_field(raw, &["created", "created_at"])?;
    DateTime::parse_from_rfc3339(&created)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn resolve_company_metadata(metadata: Option<&Value>) -> Option<CompanyMetadata> {
    let map = metadata?.as_object()?;
    let field = |key: &str| {
        map.get(key)
            .and_then(value_as_text)
            .filter(|v| v != NOT_AVAILABLE)
    };
    let metadata = CompanyMetadata {
        address: field("address"),
        phone: field("phone"),
        website: field("website"),
        maps_url: field("maps_url"),
    };
    (!metadata.is_empty()).then_some(metadata)
}

/// First non-blank string among `keys`.
fn text_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(value_as_text))
}

/// First parseable number among `keys`.
fn number_field(raw: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(value_as_f64))
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn value_as_text(value: &Value) -> Option<String> {
    value.as_str().and_then(non_blank)
}

/// Strings and numbers both count; ids arrive as either.
fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|raw| raw.trim().parse::<f64>().ok()))
        .filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
