use faunatrack_api::{parse_animals_params, AnimalsView, ApiErrorCode};
use std::collections::BTreeMap;

fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn bare_path_lists_species() {
    assert_eq!(
        parse_animals_params(&query(&[])).expect("view"),
        AnimalsView::Species
    );
}

#[test]
fn type_sightings_switches_feed() {
    assert_eq!(
        parse_animals_params(&query(&[("type", "sightings")])).expect("view"),
        AnimalsView::Sightings
    );
}

#[test]
fn unknown_type_value_is_rejected() {
    let err = parse_animals_params(&query(&[("type", "species")])).expect_err("reject");
    assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
    assert_eq!(err.code.as_str(), "invalid_query_parameter");
}

#[test]
fn unknown_parameter_is_rejected() {
    let err = parse_animals_params(&query(&[("kind", "sightings")])).expect_err("reject");
    assert_eq!(err.code, ApiErrorCode::InvalidQueryParameter);
}

#[test]
fn error_envelope_serializes_snake_case_codes() {
    let err = faunatrack_api::ApiError::invalid_param("type", "bogus").with_request_id("req-1");
    let value = serde_json::to_value(&err).expect("encode");
    assert_eq!(value["code"], "invalid_query_parameter");
    assert_eq!(value["request_id"], "req-1");
    assert!(value["details"]["field_errors"].is_array());
}
