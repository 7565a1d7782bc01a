#![forbid(unsafe_code)]
//! Faunatrack domain SSOT: validated species, sighting, and statistics types.

mod ids;
mod sighting;
mod species;
mod stats;

pub use ids::{ParseError, SightingId, SpeciesId, NAME_MAX_LEN, TEXT_MAX_LEN};
pub use sighting::{
    Coordinates, HealthStatus, NewSighting, SightingRecord, GROUP_SIZE_MAX,
};
pub use species::{
    validate_species_collection, AltitudeBand, AltitudeRange, ConservationStatus, SpeciesRecord,
    ThreatLevel, ALTITUDE_MAX_M,
};
pub use stats::{ConservationSuccess, RegionLedger, StatsSnapshot, ThreatLevelCounts};

pub const CRATE_NAME: &str = "faunatrack-model";
