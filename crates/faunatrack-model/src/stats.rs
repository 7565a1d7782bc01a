// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Species counted per threat level. Always carries all four buckets,
/// zero or not, matching the published stats shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThreatLevelCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl ThreatLevelCounts {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low
    }
}

/// Conservation-programme outcome figures. Hand-maintained, not derivable
/// from the entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConservationSuccess {
    pub tiger_population_increase: u64,
    pub elephant_corridor_established: u64,
    pub community_programs: u64,
    pub anti_poaching_operations: u64,
}

/// The curated operational figures that ride along with every stats
/// snapshot: protected-area counts, staffing, programme outcomes. These are
/// maintained beside the seed data and merged into snapshots verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionLedger {
    pub protected_areas: u64,
    pub active_researchers: u64,
    pub conservation_projects: u64,
    pub forest_divisions: u64,
    pub national_parks: u64,
    pub wildlife_sanctuaries: u64,
    pub tiger_reserves: u64,
    pub conservation_success: ConservationSuccess,
}

/// Denormalized summary snapshot served by `/api/stats`. Derived fields are
/// computed from the entity collections at assembly time; the rest comes from
/// the `RegionLedger`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsSnapshot {
    pub total_species: u64,
    pub total_population: u64,
    pub endangered_species: u64,
    pub recent_sightings: u64,
    pub protected_areas: u64,
    pub active_researchers: u64,
    pub conservation_projects: u64,
    pub forest_divisions: u64,
    pub national_parks: u64,
    pub wildlife_sanctuaries: u64,
    pub tiger_reserves: u64,
    pub threat_levels: ThreatLevelCounts,
    /// Zone label to species count, keys sorted by label.
    pub altitude_zones: BTreeMap<String, u64>,
    pub conservation_success: ConservationSuccess,
    /// Date the derived figures were computed for.
    pub as_of: NaiveDate,
}
