use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faunatrack_model::{
    AltitudeRange, ConservationStatus, SpeciesId, SpeciesRecord, ThreatLevel,
};
use faunatrack_query::{filter_species, group_by_status, StatusFilter};

fn synthetic_catalog(len: u64) -> Vec<SpeciesRecord> {
    (1..=len)
        .map(|i| SpeciesRecord {
            id: SpeciesId::new(i).expect("species id"),
            species: format!("Species {i}"),
            scientific_name: format!("Genus exemplar{i}"),
            status: ConservationStatus::ALL[(i % 5) as usize],
            population: i * 13 % 4000,
            habitat: "mixed forest".to_string(),
            location: "Uttarakhand".to_string(),
            forest_division: None,
            last_sighting: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
            threat_level: ThreatLevel::Medium,
            conservation_efforts: String::new(),
            image_url: String::new(),
            weight_range: String::new(),
            lifespan: String::new(),
            diet: String::new(),
            altitude_range: AltitudeRange::new(200, 200 + (i % 4000) as u32).expect("altitude"),
            local_name: (i % 3 == 0).then(|| format!("Local {i}")),
        })
        .collect()
}

fn bench_filter_species(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);
    c.bench_function("filter_species/search_1000", |b| {
        b.iter(|| {
            filter_species(
                black_box(&catalog),
                black_box("exemplar7"),
                StatusFilter::All,
            )
        });
    });
    c.bench_function("filter_species/status_1000", |b| {
        b.iter(|| {
            filter_species(
                black_box(&catalog),
                "",
                StatusFilter::Only(ConservationStatus::Endangered),
            )
        });
    });
    c.bench_function("group_by_status/1000", |b| {
        b.iter(|| group_by_status(black_box(&catalog)));
    });
}

criterion_group!(benches, bench_filter_species);
criterion_main!(benches);
