use chrono::NaiveDate;
use faunatrack_api::{validate_submission, SubmitSightingRequest};
use faunatrack_model::{
    AltitudeRange, ConservationStatus, Coordinates, HealthStatus, SpeciesId, SpeciesRecord,
    ThreatLevel,
};

fn catalog() -> Vec<SpeciesRecord> {
    vec![SpeciesRecord {
        id: SpeciesId::new(1).expect("species id"),
        species: "Bengal Tiger".to_string(),
        scientific_name: "Panthera tigris tigris".to_string(),
        status: ConservationStatus::Endangered,
        population: 560,
        habitat: "Sal forests".to_string(),
        location: "Jim Corbett National Park".to_string(),
        forest_division: None,
        last_sighting: NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
        threat_level: ThreatLevel::High,
        conservation_efforts: String::new(),
        image_url: String::new(),
        weight_range: String::new(),
        lifespan: String::new(),
        diet: String::new(),
        altitude_range: AltitudeRange::new(330, 1200).expect("altitude"),
        local_name: Some("Bagh".to_string()),
    }]
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("date")
}

fn valid_request() -> SubmitSightingRequest {
    SubmitSightingRequest {
        species: "bengal tiger".to_string(),
        animal_id: None,
        location: "Dhikala grassland".to_string(),
        coordinates: Some(Coordinates::new(29.5581, 78.9233).expect("coordinates")),
        date: None,
        observer: "R. Negi".to_string(),
        behavior: "Resting near water".to_string(),
        group_size: 1,
        health_status: "Good".to_string(),
        notes: String::new(),
        forest_range: Some("Dhikala Range".to_string()),
        weather: None,
    }
}

#[test]
fn accepts_valid_submission_and_resolves_species_by_name() {
    let sighting =
        validate_submission(&valid_request(), &catalog(), today()).expect("valid submission");
    assert_eq!(sighting.animal_id.get(), 1);
    // Denormalized name comes from the catalog, not the caller's casing.
    assert_eq!(sighting.species, "Bengal Tiger");
    assert_eq!(sighting.health_status, HealthStatus::Good);
    assert_eq!(sighting.date, today());
}

#[test]
fn explicit_animal_id_takes_precedence_and_must_exist() {
    let mut request = valid_request();
    request.animal_id = Some(SpeciesId::new(1).expect("id"));
    request.species = "ignored".to_string();
    let sighting = validate_submission(&request, &catalog(), today()).expect("valid");
    assert_eq!(sighting.species, "Bengal Tiger");

    request.animal_id = Some(SpeciesId::new(99).expect("id"));
    let errors = validate_submission(&request, &catalog(), today()).expect_err("unknown id");
    assert!(errors.iter().any(|e| e.field == "animal_id"));
}

#[test]
fn unknown_species_name_is_a_field_error() {
    let mut request = valid_request();
    request.species = "Yeti".to_string();
    let errors = validate_submission(&request, &catalog(), today()).expect_err("unknown species");
    assert!(errors.iter().any(|e| e.field == "species"));
}

#[test]
fn zero_group_size_is_rejected() {
    let mut request = valid_request();
    request.group_size = 0;
    let errors = validate_submission(&request, &catalog(), today()).expect_err("zero group");
    assert!(errors.iter().any(|e| e.field == "group_size"));
}

#[test]
fn missing_coordinates_are_rejected_not_fabricated() {
    let mut request = valid_request();
    request.coordinates = None;
    let errors = validate_submission(&request, &catalog(), today()).expect_err("no coordinates");
    assert!(errors
        .iter()
        .any(|e| e.field == "coordinates" && e.reason == "required"));
}

#[test]
fn out_of_bounds_coordinates_are_rejected() {
    let mut request = valid_request();
    request.coordinates = Some(Coordinates {
        lat: 95.0,
        lng: 78.9,
    });
    let errors = validate_submission(&request, &catalog(), today()).expect_err("bad latitude");
    assert!(errors.iter().any(|e| e.field == "coordinates"));
}

#[test]
fn unknown_health_status_is_rejected() {
    let mut request = valid_request();
    request.health_status = "Thriving".to_string();
    let errors = validate_submission(&request, &catalog(), today()).expect_err("bad status");
    assert!(errors.iter().any(|e| e.field == "health_status"));
}

#[test]
fn future_dates_are_rejected() {
    let mut request = valid_request();
    request.date = Some(NaiveDate::from_ymd_opt(2024, 3, 2).expect("date"));
    let errors = validate_submission(&request, &catalog(), today()).expect_err("future date");
    assert!(errors.iter().any(|e| e.field == "date"));
}

#[test]
fn multiple_failures_are_all_reported() {
    let mut request = valid_request();
    request.species = "Yeti".to_string();
    request.observer = String::new();
    request.group_size = 0;
    request.coordinates = None;
    let errors = validate_submission(&request, &catalog(), today()).expect_err("many errors");
    assert_eq!(errors.len(), 4);
}

#[test]
fn request_body_rejects_unknown_fields() {
    let raw = r#"{
        "species": "Bengal Tiger",
        "location": "Dhikala",
        "observer": "R. Negi",
        "group_size": 1,
        "health_status": "Good",
        "sneaky": true
    }"#;
    assert!(serde_json::from_str::<SubmitSightingRequest>(raw).is_err());
}
