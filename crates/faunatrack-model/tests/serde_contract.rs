use faunatrack_model::{
    AltitudeBand, ConservationStatus, HealthStatus, SightingRecord, SpeciesRecord, ThreatLevel,
};
use serde_json::json;

const SPECIES_JSON: &str = r#"{
  "id": 1,
  "species": "Bengal Tiger",
  "scientific_name": "Panthera tigris tigris",
  "status": "Endangered",
  "population": 560,
  "habitat": "Sal forests and grasslands",
  "location": "Jim Corbett National Park",
  "forest_division": "Ramnagar Forest Division",
  "last_sighting": "2024-01-15",
  "threat_level": "High",
  "conservation_efforts": "Project Tiger core area",
  "image_url": "/images/bengal-tiger.jpg",
  "weight_range": "140-260 kg",
  "lifespan": "10-15 years",
  "diet": "Carnivore",
  "altitude_range": "330-1200m",
  "local_name": "Bagh"
}"#;

const SIGHTING_JSON: &str = r#"{
  "id": 12,
  "animal_id": 1,
  "species": "Bengal Tiger",
  "location": "Dhikala grassland",
  "coordinates": { "lat": 29.5581, "lng": 78.9233 },
  "date": "2024-02-02",
  "observer": "R. Negi",
  "behavior": "Stalking chital herd",
  "group_size": 1,
  "health_status": "Good",
  "notes": "Single adult male",
  "forest_range": "Dhikala Range",
  "weather": "Clear, 18C"
}"#;

#[test]
fn species_record_round_trips_through_pinned_wire_shape() {
    let record: SpeciesRecord = serde_json::from_str(SPECIES_JSON).expect("decode species");
    record.validate().expect("fixture validates");
    assert_eq!(record.status, ConservationStatus::Endangered);
    assert_eq!(record.threat_level, ThreatLevel::High);
    assert_eq!(record.altitude_range.band(), AltitudeBand::LowHills);

    let value = serde_json::to_value(&record).expect("encode species");
    assert_eq!(value["status"], json!("Endangered"));
    assert_eq!(value["threat_level"], json!("High"));
    assert_eq!(value["altitude_range"], json!("330-1200m"));
    assert_eq!(value["last_sighting"], json!("2024-01-15"));

    let back: SpeciesRecord = serde_json::from_value(value).expect("decode again");
    assert_eq!(back, record);
}

#[test]
fn sighting_record_round_trips_through_pinned_wire_shape() {
    let record: SightingRecord = serde_json::from_str(SIGHTING_JSON).expect("decode sighting");
    record.validate().expect("fixture validates");
    assert_eq!(record.health_status, HealthStatus::Good);

    let value = serde_json::to_value(&record).expect("encode sighting");
    assert_eq!(value["coordinates"]["lat"], json!(29.5581));
    assert_eq!(value["health_status"], json!("Good"));
    assert_eq!(value["date"], json!("2024-02-02"));
}

#[test]
fn multiword_statuses_use_display_cased_wire_strings() {
    assert_eq!(
        serde_json::to_value(ConservationStatus::CriticallyEndangered).expect("encode"),
        json!("Critically Endangered")
    );
    assert_eq!(
        serde_json::to_value(ConservationStatus::NearThreatened).expect("encode"),
        json!("Near Threatened")
    );
    assert_eq!(
        serde_json::to_value(AltitudeBand::Alpine).expect("encode"),
        json!("Alpine (4000m+)")
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(SPECIES_JSON).expect("parse");
    value["unexpected"] = json!(true);
    assert!(serde_json::from_value::<SpeciesRecord>(value).is_err());
}

#[test]
fn optional_fields_are_omitted_when_absent() {
    let mut value: serde_json::Value = serde_json::from_str(SPECIES_JSON).expect("parse");
    value.as_object_mut().expect("object").remove("local_name");
    value
        .as_object_mut()
        .expect("object")
        .remove("forest_division");
    let record: SpeciesRecord = serde_json::from_value(value).expect("decode without optionals");
    assert!(record.local_name.is_none());

    let encoded = serde_json::to_value(&record).expect("encode");
    assert!(encoded.get("local_name").is_none());
    assert!(encoded.get("forest_division").is_none());
}
