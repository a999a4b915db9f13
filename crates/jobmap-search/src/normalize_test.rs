use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// company
// -----------------------------------------------------------------------

#[test]
fn company_string_is_used_directly() {
    let job = normalize_job(&json!({ "company": "Acme" }), "London", 0);
    assert_eq!(job.company_name, "Acme");
}

#[test]
fn company_object_uses_display_name() {
    let job = normalize_job(&json!({ "company": { "display_name": "Acme Ltd" } }), "London", 0);
    assert_eq!(job.company_name, "Acme Ltd");
}

#[test]
fn company_missing_defaults() {
    let job = normalize_job(&json!({}), "London", 0);
    assert_eq!(job.company_name, UNKNOWN_COMPANY);

    let job = normalize_job(&json!({ "company": { "name": "no display" } }), "London", 0);
    assert_eq!(job.company_name, UNKNOWN_COMPANY);
}

// -----------------------------------------------------------------------
// location text
// -----------------------------------------------------------------------

#[test]
fn location_area_uses_first_element() {
    let raw = json!({
        "company": "Acme",
        "location": { "area": ["Shoreditch", "London"] }
    });
    let job = normalize_job(&raw, "London", 0);
    assert_eq!(job.company_name, "Acme");
    assert_eq!(job.location_text, "Shoreditch");
    assert!(job.coordinates.is_none());
}

#[test]
fn location_display_name_wins_over_other_fields() {
    let raw = json!({
        "location": {
            "display_name": "Camden, London",
            "name": "Camden",
            "area": ["UK", "London", "Camden"]
        }
    });
    assert_eq!(normalize_job(&raw, "London", 0).location_text, "Camden, London");
}

#[test]
fn location_falls_back_through_name_then_address() {
    let named = json!({ "location": { "name": "Leeds", "address": "1 Park Row" } });
    assert_eq!(normalize_job(&named, "Leeds", 0).location_text, "Leeds");

    let addressed = json!({ "location": { "address": "1 Park Row" } });
    assert_eq!(normalize_job(&addressed, "Leeds", 0).location_text, "1 Park Row");
}

#[test]
fn location_plain_string_is_used_directly() {
    let job = normalize_job(&json!({ "location": "Remote" }), "London", 0);
    assert_eq!(job.location_text, "Remote");
}

#[test]
fn location_object_without_known_fields_is_unknown() {
    let job = normalize_job(&json!({ "location": { "area": [] } }), "London", 0);
    assert_eq!(job.location_text, UNKNOWN_LOCATION);
}

#[test]
fn location_absent_is_not_specified() {
    let job = normalize_job(&json!({ "title": "Chef" }), "London", 0);
    assert_eq!(job.location_text, LOCATION_NOT_SPECIFIED);
}

// -----------------------------------------------------------------------
// coordinates
// -----------------------------------------------------------------------

#[test]
fn coordinates_are_parsed_from_string_scalars() {
    let raw = json!({
        "company": { "display_name": "Acme Ltd" },
        "latitude": "51.5",
        "longitude": "-0.1"
    });
    let job = normalize_job(&raw, "London", 0);
    assert_eq!(job.company_name, "Acme Ltd");
    assert_eq!(
        job.coordinates,
        Some(Coordinates {
            latitude: 51.5,
            longitude: -0.1
        })
    );
}

#[test]
fn explicit_coordinates_object_is_preferred() {
    let raw = json!({
        "coordinates": { "latitude": 53.48, "longitude": -2.24 },
        "latitude": 51.5,
        "longitude": -0.1
    });
    let c = normalize_job(&raw, "Manchester", 0).coordinates.unwrap();
    assert!((c.latitude - 53.48).abs() < f64::EPSILON);
    assert!((c.longitude + 2.24).abs() < f64::EPSILON);
}

#[test]
fn unparseable_coordinates_are_left_unset() {
    let raw = json!({ "latitude": "north", "longitude": "-0.1" });
    assert!(normalize_job(&raw, "London", 0).coordinates.is_none());

    let half = json!({ "latitude": 51.5 });
    assert!(normalize_job(&half, "London", 0).coordinates.is_none());
}

// -----------------------------------------------------------------------
// defaults and optional fields
// -----------------------------------------------------------------------

#[test]
fn empty_record_gets_every_default() {
    let job = normalize_job(&json!({}), "Bristol", 3);
    assert_eq!(job.id, "Bristol-3");
    assert_eq!(job.title, UNTITLED_POSITION);
    assert_eq!(job.description, NO_DESCRIPTION);
    assert_eq!(job.currency, "£");
    assert_eq!(job.source_api, UNKNOWN_SOURCE);
    assert_eq!(job.search_location, "Bristol");
    assert!(job.salary_min.is_none());
    assert!(job.category.is_none());
    assert!(job.created_at.is_none());
    assert!(job.company_metadata.is_none());
    assert_eq!(job.salary_display(), "not specified");
}

#[test]
fn non_object_record_still_normalizes() {
    let job = normalize_job(&json!("garbage"), "Bristol", 0);
    assert_eq!(job.title, UNTITLED_POSITION);
    assert_eq!(job.location_text, LOCATION_NOT_SPECIFIED);
}

#[test]
fn blank_title_counts_as_missing() {
    let job = normalize_job(&json!({ "title": "   " }), "London", 0);
    assert_eq!(job.title, UNTITLED_POSITION);
}

#[test]
fn numeric_id_is_stringified() {
    let job = normalize_job(&json!({ "id": 4_812_345 }), "London", 7);
    assert_eq!(job.id, "4812345");
}

#[test]
fn salary_and_currency_are_read() {
    let raw = json!({
        "salary_min": 30000,
        "salary_max": "45000",
        "currency": "€"
    });
    let job = normalize_job(&raw, "Dublin", 0);
    assert_eq!(job.salary_min, Some(30000.0));
    assert_eq!(job.salary_max, Some(45000.0));
    assert_eq!(job.salary_display(), "€30000 - €45000");
}

#[test]
fn category_accepts_object_or_string() {
    let obj = normalize_job(&json!({ "category": { "label": "IT Jobs" } }), "London", 0);
    assert_eq!(obj.category.unwrap().label, "IT Jobs");

    let plain = normalize_job(&json!({ "category": "Sales Jobs" }), "London", 0);
    assert_eq!(plain.category.unwrap().label, "Sales Jobs");
}

#[test]
fn created_timestamp_is_parsed() {
    let job = normalize_job(&json!({ "created": "2024-03-01T09:30:00Z" }), "London", 0);
    assert_eq!(
        job.created_at.map(|t| t.to_rfc3339()),
        Some("2024-03-01T09:30:00+00:00".to_string())
    );

    let bad = normalize_job(&json!({ "created": "last tuesday" }), "London", 0);
    assert!(bad.created_at.is_none());
}

#[test]
fn provider_distance_is_kept() {
    let job = normalize_job(&json!({ "distance": 4.2 }), "London", 0);
    assert_eq!(job.distance_km, Some(4.2));
}

#[test]
fn placeholder_metadata_is_dropped() {
    let raw = json!({
        "company_metadata": {
            "address": "N/A",
            "phone": "N/A",
            "website": "https://acme.example",
            "maps_url": "N/A"
        }
    });
    let meta = normalize_job(&raw, "London", 0).company_metadata.unwrap();
    assert_eq!(meta.website.as_deref(), Some("https://acme.example"));
    assert!(meta.address.is_none());

    let all_na = json!({ "company_metadata": { "address": "N/A", "phone": "N/A" } });
    assert!(normalize_job(&all_na, "London", 0).company_metadata.is_none());
}

#[test]
fn source_and_job_type_fallbacks() {
    let raw = json!({ "source": "Reed", "contract_time": "full_time" });
    let job = normalize_job(&raw, "London", 0);
    assert_eq!(job.source_api, "Reed");
    assert_eq!(job.job_type.as_deref(), Some("full_time"));
}

#[test]
fn normalizing_twice_is_structurally_equal() {
    let raw = json!({
        "id": "abc",
        "title": "Backend Engineer",
        "company": { "display_name": "Acme Ltd" },
        "location": { "area": ["UK", "London"] },
        "latitude": 51.5,
        "longitude": -0.12,
        "salary_min": 60000,
        "created": "2024-03-01T09:30:00Z",
        "source_api": "Adzuna"
    });
    assert_eq!(
        normalize_job(&raw, "London", 0),
        normalize_job(&raw, "London", 0)
    );
}
