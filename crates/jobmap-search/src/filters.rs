//! Category and job-type filters: the user's selection, the query parameters
//! it produces, and the catalog of options the provider offers.

use serde::Serialize;
use serde_json::Value;

use crate::error::ProviderError;

pub const CATEGORY_PARAM: &str = "category";
pub const JOB_TYPE_PARAM: &str = "job_type";

/// A single `key=value` query parameter produced from a filter selection.
pub type FilterParam = (&'static str, String);

/// Builds provider query parameters from the selected filters.
///
/// One `category` pair per category followed by one `job_type` pair per job
/// type, each group in the order given. Empty selections produce no pairs.
#[must_use]
pub fn build_filter_params<C, T>(categories: &[C], job_types: &[T]) -> Vec<FilterParam>
where
    C: AsRef<str>,
    T: AsRef<str>,
{
    categories
        .iter()
        .map(|c| (CATEGORY_PARAM, c.as_ref().to_owned()))
        .chain(
            job_types
                .iter()
                .map(|t| (JOB_TYPE_PARAM, t.as_ref().to_owned())),
        )
        .collect()
}

/// Turns a job-type key such as `"full_time"` into a label like `"Full Time"`.
#[must_use]
pub fn format_job_type(job_type: &str) -> String {
    job_type
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The set of toggled filters, kept in the order the user clicked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    categories: Vec<String>,
    job_types: Vec<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from pre-chosen lists, dropping repeats.
    #[must_use]
    pub fn from_lists<C, T>(categories: C, job_types: T) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let mut selection = Self::new();
        for c in categories {
            push_unique(&mut selection.categories, c.into());
        }
        for t in job_types {
            push_unique(&mut selection.job_types, t.into());
        }
        selection
    }

    /// Selects `category`, or deselects it if already selected.
    ///
    /// Returns `true` when the category is selected after the call.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        toggle(&mut self.categories, category)
    }

    /// Selects `job_type`, or deselects it if already selected.
    ///
    /// Returns `true` when the job type is selected after the call.
    pub fn toggle_job_type(&mut self, job_type: &str) -> bool {
        toggle(&mut self.job_types, job_type)
    }

    pub fn reset(&mut self) {
        self.categories.clear();
        self.job_types.clear();
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn job_types(&self) -> &[String] {
        &self.job_types
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.job_types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    #[must_use]
    pub fn params(&self) -> Vec<FilterParam> {
        build_filter_params(&self.categories, &self.job_types)
    }
}

fn toggle(list: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
        false
    } else {
        list.push(value.to_owned());
        true
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Filter options offered by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCatalog {
    pub categories: Vec<String>,
    pub job_types: Vec<String>,
}

impl FilterCatalog {
    /// Options shown when the provider's catalog endpoints are unreachable.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            categories: fallback_categories(),
            job_types: fallback_job_types(),
        }
    }
}

#[must_use]
pub fn fallback_categories() -> Vec<String> {
    [
        "IT Jobs",
        "Engineering Jobs",
        "Healthcare & Nursing Jobs",
        "Teaching Jobs",
        "Accounting & Finance Jobs",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

#[must_use]
pub fn fallback_job_types() -> Vec<String> {
    ["full_time", "part_time", "contract", "permanent"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Parses a catalog list that is either a bare array of strings or an object
/// wrapping one under `key`. Non-string entries are skipped.
///
/// # Errors
///
/// Returns [`ProviderError::UnexpectedPayload`] if the body is neither shape.
pub fn parse_catalog_list(body: &Value, key: &str) -> Result<Vec<String>, ProviderError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(map) => match map.get(key) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ProviderError::UnexpectedPayload {
                    context: format!("{key} catalog"),
                })
            }
        },
        _ => {
            return Err(ProviderError::UnexpectedPayload {
                context: format!("{key} catalog"),
            })
        }
    };

    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Lower-cases job types and drops repeats, keeping first occurrence order.
#[must_use]
pub fn normalize_job_types(job_types: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(job_types.len());
    for t in job_types {
        push_unique(&mut out, t.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_emits_pairs_in_selection_order() {
        let params = build_filter_params(&["IT Jobs", "Engineering Jobs"], &["full_time"]);
        assert_eq!(
            params,
            vec![
                ("category", "IT Jobs".to_string()),
                ("category", "Engineering Jobs".to_string()),
                ("job_type", "full_time".to_string()),
            ]
        );
    }

    #[test]
    fn build_with_empty_selection_is_empty() {
        let none: [&str; 0] = [];
        assert!(build_filter_params(&none, &none).is_empty());
    }

    #[test]
    fn build_does_not_reorder_selection() {
        let params = build_filter_params(&["Teaching Jobs", "IT Jobs"], &["part_time", "contract"]);
        let values: Vec<&str> = params.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(values, ["Teaching Jobs", "IT Jobs", "part_time", "contract"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = FilterSelection::new();
        assert!(sel.toggle_category("IT Jobs"));
        assert!(sel.toggle_job_type("contract"));
        assert_eq!(sel.active_count(), 2);
        assert!(!sel.toggle_category("IT Jobs"));
        assert!(sel.categories().is_empty());
        assert_eq!(sel.job_types(), ["contract"]);
    }

    #[test]
    fn toggle_keeps_click_order() {
        let mut sel = FilterSelection::new();
        sel.toggle_category("Sales Jobs");
        sel.toggle_category("IT Jobs");
        sel.toggle_category("Admin Jobs");
        sel.toggle_category("IT Jobs");
        sel.toggle_category("IT Jobs");
        assert_eq!(sel.categories(), ["Sales Jobs", "Admin Jobs", "IT Jobs"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut sel = FilterSelection::from_lists(["IT Jobs"], ["full_time"]);
        sel.reset();
        assert!(sel.is_empty());
        assert!(sel.params().is_empty());
    }

    #[test]
    fn from_lists_drops_repeats() {
        let sel = FilterSelection::from_lists(["IT Jobs", "IT Jobs"], ["contract"]);
        assert_eq!(sel.categories(), ["IT Jobs"]);
    }

    #[test]
    fn format_job_type_title_cases_words() {
        assert_eq!(format_job_type("full_time"), "Full Time");
        assert_eq!(format_job_type("permanent"), "Permanent");
        assert_eq!(format_job_type(""), "");
    }

    #[test]
    fn catalog_accepts_bare_array() {
        let body = serde_json::json!(["IT Jobs", "Sales Jobs"]);
        assert_eq!(
            parse_catalog_list(&body, "categories").unwrap(),
            ["IT Jobs", "Sales Jobs"]
        );
    }

    #[test]
    fn catalog_accepts_wrapped_object() {
        let body = serde_json::json!({ "job_types": ["full_time", 3, "contract"] });
        assert_eq!(
            parse_catalog_list(&body, "job_types").unwrap(),
            ["full_time", "contract"]
        );
    }

    #[test]
    fn catalog_rejects_unknown_shape() {
        let body = serde_json::json!({ "items": [] });
        assert!(matches!(
            parse_catalog_list(&body, "categories"),
            Err(ProviderError::UnexpectedPayload { .. })
        ));
    }

    #[test]
    fn job_types_are_lowercased_and_deduplicated() {
        let raw = vec![
            "Full_Time".to_string(),
            "contract".to_string(),
            "full_time".to_string(),
            "CONTRACT".to_string(),
        ];
        assert_eq!(normalize_job_types(raw), ["full_time", "contract"]);
    }
}
