use chrono::NaiveDate;
use faunatrack_model::{
    validate_species_collection, AltitudeBand, AltitudeRange, ConservationStatus, Coordinates,
    HealthStatus, SightingId, SightingRecord, SpeciesId, SpeciesRecord, ThreatLevel,
    GROUP_SIZE_MAX, NAME_MAX_LEN,
};

fn species_fixture(id: u64) -> SpeciesRecord {
    SpeciesRecord {
        id: SpeciesId::new(id).expect("species id"),
        species: "Bengal Tiger".to_string(),
        scientific_name: "Panthera tigris tigris".to_string(),
        status: ConservationStatus::Endangered,
        population: 560,
        habitat: "Sal forests and grasslands".to_string(),
        location: "Jim Corbett National Park".to_string(),
        forest_division: Some("Ramnagar Forest Division".to_string()),
        last_sighting: NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
        threat_level: ThreatLevel::High,
        conservation_efforts: "Project Tiger core area".to_string(),
        image_url: "/images/bengal-tiger.jpg".to_string(),
        weight_range: "140-260 kg".to_string(),
        lifespan: "10-15 years".to_string(),
        diet: "Carnivore".to_string(),
        altitude_range: AltitudeRange::new(330, 1200).expect("altitude"),
        local_name: Some("Bagh".to_string()),
    }
}

fn sighting_fixture() -> SightingRecord {
    SightingRecord {
        id: SightingId::new(1).expect("sighting id"),
        animal_id: SpeciesId::new(1).expect("species id"),
        species: "Bengal Tiger".to_string(),
        location: "Dhikala grassland".to_string(),
        coordinates: Coordinates::new(29.5581, 78.9233).expect("coordinates"),
        date: NaiveDate::from_ymd_opt(2024, 2, 2).expect("date"),
        observer: "R. Negi".to_string(),
        behavior: "Stalking chital herd".to_string(),
        group_size: 1,
        health_status: HealthStatus::Good,
        notes: String::new(),
        forest_range: Some("Dhikala Range".to_string()),
        weather: Some("Clear, 18C".to_string()),
    }
}

#[test]
fn ids_reject_zero() {
    assert!(SpeciesId::new(0).is_err());
    assert!(SightingId::new(0).is_err());
    assert_eq!(SpeciesId::new(7).expect("id").get(), 7);
}

#[test]
fn status_parse_is_strict_on_wire_labels() {
    assert_eq!(
        ConservationStatus::parse("Critically Endangered").expect("status"),
        ConservationStatus::CriticallyEndangered
    );
    assert!(ConservationStatus::parse("critically endangered").is_err());
    assert!(ConservationStatus::parse("Extinct").is_err());
    assert!(ThreatLevel::parse("critical").is_err());
    assert!(HealthStatus::parse("OK").is_err());
}

#[test]
fn endangered_covers_exactly_cr_and_en() {
    let endangered: Vec<_> = ConservationStatus::ALL
        .into_iter()
        .filter(|s| s.is_endangered())
        .collect();
    assert_eq!(
        endangered,
        vec![
            ConservationStatus::CriticallyEndangered,
            ConservationStatus::Endangered
        ]
    );
}

#[test]
fn altitude_range_parse_and_band() {
    let range = AltitudeRange::parse("330-1200m").expect("range");
    assert_eq!(range.low_m(), 330);
    assert_eq!(range.high_m(), 1200);
    assert_eq!(range.band(), AltitudeBand::LowHills);

    assert_eq!(
        AltitudeRange::new(3200, 5400).expect("range").band(),
        AltitudeBand::Alpine
    );
    assert_eq!(
        AltitudeRange::new(1500, 3300).expect("range").band(),
        AltitudeBand::MidHills
    );
    assert_eq!(
        AltitudeRange::new(2500, 4300).expect("range").band(),
        AltitudeBand::HighHills
    );

    assert!(AltitudeRange::parse("330-1200").is_err());
    assert!(AltitudeRange::parse("1200-330m").is_err());
    assert!(AltitudeRange::new(100, 9500).is_err());
}

#[test]
fn coordinates_bounds_are_enforced() {
    assert!(Coordinates::new(30.0668, 78.2676).is_ok());
    assert!(Coordinates::new(91.0, 0.0).is_err());
    assert!(Coordinates::new(0.0, -180.5).is_err());
    assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn species_record_validation_rejects_empty_and_oversized_names() {
    let mut record = species_fixture(1);
    record.validate().expect("fixture is valid");

    record.species = String::new();
    assert!(record.validate().is_err());

    record.species = "x".repeat(NAME_MAX_LEN + 1);
    assert!(record.validate().is_err());
}

#[test]
fn species_collection_rejects_duplicate_ids() {
    let records = vec![species_fixture(1), species_fixture(1)];
    assert!(validate_species_collection(&records).is_err());

    let records = vec![species_fixture(1), species_fixture(2)];
    validate_species_collection(&records).expect("unique ids");
}

#[test]
fn sighting_validation_rejects_zero_and_oversized_groups() {
    let mut sighting = sighting_fixture();
    sighting.validate().expect("fixture is valid");

    sighting.group_size = 0;
    assert!(sighting.validate().is_err());

    sighting.group_size = GROUP_SIZE_MAX + 1;
    assert!(sighting.validate().is_err());

    sighting.group_size = GROUP_SIZE_MAX;
    sighting.validate().expect("cap is inclusive");
}

#[test]
fn name_matches_is_case_insensitive_across_name_fields() {
    let record = species_fixture(1);
    assert!(record.name_matches(""));
    assert!(record.name_matches("tiger"));
    assert!(record.name_matches("PANTHERA"));
    assert!(record.name_matches("bagh"));
    assert!(!record.name_matches("leopard"));
}
