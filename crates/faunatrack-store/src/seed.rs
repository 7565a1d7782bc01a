// SPDX-License-Identifier: Apache-2.0

//! The Uttarakhand seed dataset. The species figures are authored so the
//! derived snapshot reproduces the published region statistics: population
//! 3382 across 8 species, 4 endangered, threat histogram 1/3/3/1, altitude
//! histogram 3/2/2/1.

use chrono::NaiveDate;
use faunatrack_model::{
    AltitudeRange, ConservationStatus, ConservationSuccess, Coordinates, HealthStatus,
    NewSighting, RegionLedger, SightingId, SightingRecord, SpeciesId, SpeciesRecord, ThreatLevel,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn species_id(raw: u64) -> SpeciesId {
    SpeciesId::new(raw).unwrap_or_else(|_| unreachable!("seed ids are nonzero"))
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u64,
    species: &str,
    scientific_name: &str,
    local_name: &str,
    status: ConservationStatus,
    population: u64,
    threat_level: ThreatLevel,
    altitude: (u32, u32),
    habitat: &str,
    location: &str,
    forest_division: &str,
    last_sighting: NaiveDate,
    conservation_efforts: &str,
    weight_range: &str,
    lifespan: &str,
    diet: &str,
) -> SpeciesRecord {
    SpeciesRecord {
        id: species_id(id),
        species: species.to_string(),
        scientific_name: scientific_name.to_string(),
        status,
        population,
        habitat: habitat.to_string(),
        location: location.to_string(),
        forest_division: Some(forest_division.to_string()),
        last_sighting,
        threat_level,
        conservation_efforts: conservation_efforts.to_string(),
        image_url: format!(
            "/images/{}.jpg",
            species.to_lowercase().replace(' ', "-")
        ),
        weight_range: weight_range.to_string(),
        lifespan: lifespan.to_string(),
        diet: diet.to_string(),
        altitude_range: AltitudeRange::new(altitude.0, altitude.1)
            .unwrap_or_else(|_| unreachable!("seed altitude ranges are valid")),
        local_name: Some(local_name.to_string()),
    }
}

#[must_use]
pub fn uttarakhand_species() -> Vec<SpeciesRecord> {
    vec![
        record(
            1,
            "Bengal Tiger",
            "Panthera tigris tigris",
            "Bagh",
            ConservationStatus::Endangered,
            560,
            ThreatLevel::High,
            (330, 1200),
            "Sal forests, grasslands and riverine belts",
            "Jim Corbett National Park",
            "Ramnagar Forest Division",
            date(2024, 1, 15),
            "Project Tiger core zone with camera-trap census and anti-poaching patrols",
            "140-260 kg",
            "10-15 years",
            "Carnivore",
        ),
        record(
            2,
            "Asian Elephant",
            "Elephas maximus indicus",
            "Haathi",
            ConservationStatus::Endangered,
            1839,
            ThreatLevel::High,
            (200, 800),
            "Moist deciduous forest and bhabar tracts",
            "Rajaji National Park",
            "Haridwar Forest Division",
            date(2024, 2, 8),
            "Corridor restoration between Rajaji and Corbett with rail-crossing mitigation",
            "2700-4500 kg",
            "50-70 years",
            "Herbivore",
        ),
        record(
            3,
            "Snow Leopard",
            "Panthera uncia",
            "Him Tendua",
            ConservationStatus::Vulnerable,
            86,
            ThreatLevel::High,
            (3200, 5400),
            "Trans-Himalayan cliffs and alpine scrub",
            "Nanda Devi National Park",
            "Chamoli Forest Division",
            date(2023, 12, 3),
            "Secure Himalaya programme with community-managed livestock insurance",
            "35-55 kg",
            "10-12 years",
            "Carnivore",
        ),
        record(
            4,
            "Himalayan Musk Deer",
            "Moschus leucogaster",
            "Kasturi Mrig",
            ConservationStatus::Endangered,
            230,
            ThreatLevel::Medium,
            (2500, 4300),
            "Subalpine birch and rhododendron forest",
            "Kedarnath Wildlife Sanctuary",
            "Rudraprayag Forest Division",
            date(2024, 1, 27),
            "Anti-snaring drives and the Kharsali conservation breeding centre",
            "11-18 kg",
            "10-14 years",
            "Herbivore",
        ),
        record(
            5,
            "Himalayan Black Bear",
            "Ursus thibetanus laniger",
            "Bhalu",
            ConservationStatus::Vulnerable,
            318,
            ThreatLevel::Medium,
            (1500, 3300),
            "Temperate oak and conifer forest",
            "Binsar Wildlife Sanctuary",
            "Almora Forest Division",
            date(2024, 2, 14),
            "Crop-raiding conflict response teams and orchard compensation scheme",
            "90-200 kg",
            "25-30 years",
            "Omnivore",
        ),
        record(
            6,
            "Himalayan Monal",
            "Lophophorus impejanus",
            "Monal",
            ConservationStatus::LeastConcern,
            142,
            ThreatLevel::Low,
            (2400, 4500),
            "Alpine meadows and upper oak forest edge",
            "Valley of Flowers National Park",
            "Joshimath Forest Division",
            date(2024, 2, 20),
            "State-bird monitoring transects with seasonal grazing closures",
            "1.8-2.4 kg",
            "10-12 years",
            "Omnivore",
        ),
        record(
            7,
            "Himalayan Goral",
            "Naemorhedus goral",
            "Ghural",
            ConservationStatus::NearThreatened,
            112,
            ThreatLevel::Medium,
            (900, 2800),
            "Steep grassy slopes and broken rocky terrain",
            "Govind Wildlife Sanctuary",
            "Uttarkashi Forest Division",
            date(2024, 1, 9),
            "Slope-habitat protection and hunting enforcement in buffer villages",
            "25-42 kg",
            "8-10 years",
            "Herbivore",
        ),
        record(
            8,
            "Gharial",
            "Gavialis gangeticus",
            "Ghariyal",
            ConservationStatus::CriticallyEndangered,
            95,
            ThreatLevel::Critical,
            (250, 450),
            "Deep river pools and sand banks of the Ramganga",
            "Jim Corbett National Park",
            "Kalagarh Forest Division",
            date(2024, 2, 1),
            "Nest protection on Ramganga sand banks with head-start rearing",
            "160-250 kg",
            "40-60 years",
            "Piscivore",
        ),
    ]
}

struct SeedSighting {
    animal_id: u64,
    species: &'static str,
    location: &'static str,
    coordinates: (f64, f64),
    date: NaiveDate,
    observer: &'static str,
    behavior: &'static str,
    group_size: u32,
    health_status: HealthStatus,
    notes: &'static str,
    forest_range: &'static str,
    weather: &'static str,
}

#[must_use]
pub fn uttarakhand_sightings() -> Vec<SightingRecord> {
    let rows = [
        SeedSighting {
            animal_id: 1,
            species: "Bengal Tiger",
            location: "Dhikala grassland",
            coordinates: (29.5581, 78.9233),
            date: date(2024, 2, 25),
            observer: "R. Negi",
            behavior: "Stalking a chital herd along the Ramganga edge",
            group_size: 1,
            health_status: HealthStatus::Excellent,
            notes: "Adult male, right flank stripe pattern matched camera-trap id T-23",
            forest_range: "Dhikala Range",
            weather: "Clear, 18C",
        },
        SeedSighting {
            animal_id: 2,
            species: "Asian Elephant",
            location: "Chilla-Motichur corridor",
            coordinates: (29.9812, 78.2104),
            date: date(2024, 2, 22),
            observer: "S. Bhandari",
            behavior: "Herd crossing towards the Ganges at dusk",
            group_size: 14,
            health_status: HealthStatus::Good,
            notes: "Two calves in the group, matriarch led the crossing",
            forest_range: "Chilla Range",
            weather: "Overcast, 21C",
        },
        SeedSighting {
            animal_id: 3,
            species: "Snow Leopard",
            location: "Dharansi ridge",
            coordinates: (30.4431, 79.7308),
            date: date(2024, 1, 18),
            observer: "P. Rawat",
            behavior: "Scent-marking along a cliff ledge",
            group_size: 1,
            health_status: HealthStatus::Good,
            notes: "Confirmed by pugmarks and a fresh bharal kill nearby",
            forest_range: "Lata Range",
            weather: "Snow flurries, -6C",
        },
        SeedSighting {
            animal_id: 4,
            species: "Himalayan Musk Deer",
            location: "Tungnath slopes",
            coordinates: (30.4889, 79.2156),
            date: date(2024, 2, 10),
            observer: "A. Panwar",
            behavior: "Browsing at birch-forest edge in early morning",
            group_size: 2,
            health_status: HealthStatus::Fair,
            notes: "One animal favoured a foreleg, possibly an old snare injury",
            forest_range: "Chopta Range",
            weather: "Fog, 2C",
        },
        SeedSighting {
            animal_id: 6,
            species: "Himalayan Monal",
            location: "Ghangaria meadow",
            coordinates: (30.7026, 79.5964),
            date: date(2024, 2, 27),
            observer: "D. Chauhan",
            behavior: "Males displaying at the meadow edge",
            group_size: 5,
            health_status: HealthStatus::Excellent,
            notes: "Display counts logged for the spring transect",
            forest_range: "Bhyundar Range",
            weather: "Sunny, 4C",
        },
        SeedSighting {
            animal_id: 8,
            species: "Gharial",
            location: "Ramganga backwater",
            coordinates: (29.5307, 78.7744),
            date: date(2024, 2, 18),
            observer: "K. Joshi",
            behavior: "Basking on a sand bank with juveniles",
            group_size: 7,
            health_status: HealthStatus::Good,
            notes: "Four juveniles from last season's protected nests",
            forest_range: "Kalagarh Range",
            weather: "Clear, 16C",
        },
    ];

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let sighting = NewSighting {
                animal_id: species_id(row.animal_id),
                species: row.species.to_string(),
                location: row.location.to_string(),
                coordinates: Coordinates::new(row.coordinates.0, row.coordinates.1)
                    .unwrap_or_else(|_| unreachable!("seed coordinates are in bounds")),
                date: row.date,
                observer: row.observer.to_string(),
                behavior: row.behavior.to_string(),
                group_size: row.group_size,
                health_status: row.health_status,
                notes: row.notes.to_string(),
                forest_range: Some(row.forest_range.to_string()),
                weather: Some(row.weather.to_string()),
            };
            let id = SightingId::new(index as u64 + 1)
                .unwrap_or_else(|_| unreachable!("seed ids are nonzero"));
            sighting.into_record(id)
        })
        .collect()
}

/// Operational figures for the region, maintained by hand beside the
/// entity seed. Merged verbatim into every stats snapshot.
#[must_use]
pub fn region_ledger() -> RegionLedger {
    RegionLedger {
        protected_areas: 12,
        active_researchers: 34,
        conservation_projects: 15,
        forest_divisions: 6,
        national_parks: 6,
        wildlife_sanctuaries: 7,
        tiger_reserves: 2,
        conservation_success: ConservationSuccess {
            tiger_population_increase: 15,
            elephant_corridor_established: 3,
            community_programs: 25,
            anti_poaching_operations: 156,
        },
    }
}
