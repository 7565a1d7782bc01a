#![forbid(unsafe_code)]
//! Pure derivations over in-memory faunatrack collections: the filtering,
//! grouping, and snapshot assembly every dashboard view is built from.
//! No I/O, no side effects on inputs.

use chrono::{Days, NaiveDate};
use faunatrack_model::{
    AltitudeBand, ConservationStatus, RegionLedger, SightingRecord, SpeciesRecord, StatsSnapshot,
    ThreatLevel, ThreatLevelCounts,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CRATE_NAME: &str = "faunatrack-query";

/// Days back from `as_of` a sighting still counts as "recent".
pub const RECENT_SIGHTING_WINDOW_DAYS: u64 = 30;

/// Status filter with an explicit "no filter" sentinel, so the sentinel can
/// never collide with a real status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ConservationStatus),
}

impl StatusFilter {
    /// Parses the wire-level filter value: `"all"` (case-insensitive) means
    /// no filter; anything else must be an exact status label.
    pub fn parse(raw: &str) -> Result<Self, faunatrack_model::ParseError> {
        if raw.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        ConservationStatus::parse(raw).map(Self::Only)
    }

    #[must_use]
    pub fn accepts(self, status: ConservationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }
}

/// Subsequence of `species` matching a case-insensitive name search and the
/// status filter. Preserves input order and borrows the records.
///
/// An empty `search_term` matches every record. A status filter that matches
/// nothing yields an empty result, not an error.
#[must_use]
pub fn filter_species<'a>(
    species: &'a [SpeciesRecord],
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<&'a SpeciesRecord> {
    species
        .iter()
        .filter(|record| record.name_matches(search_term) && status_filter.accepts(record.status))
        .collect()
}

/// Count of species per status, keys in first-seen order. No zero-count
/// entries are synthesized; the counts always sum to the input length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts(Vec<(ConservationStatus, u64)>);

impl StatusCounts {
    #[must_use]
    pub fn get(&self, status: ConservationStatus) -> u64 {
        self.0
            .iter()
            .find(|(seen, _)| *seen == status)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConservationStatus, u64)> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, count)| count).sum()
    }
}

#[must_use]
pub fn group_by_status(species: &[SpeciesRecord]) -> StatusCounts {
    let mut counts: Vec<(ConservationStatus, u64)> = Vec::new();
    for record in species {
        match counts.iter_mut().find(|(status, _)| *status == record.status) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.status, 1)),
        }
    }
    StatusCounts(counts)
}

/// Species count per altitude band, derived from each record's altitude
/// range by midpoint bucketing. Bands in ascending order, zero-count bands
/// omitted (mirroring `group_by_status`).
#[must_use]
pub fn altitude_zone_counts(species: &[SpeciesRecord]) -> Vec<(AltitudeBand, u64)> {
    AltitudeBand::ALL
        .into_iter()
        .filter_map(|band| {
            let count = species
                .iter()
                .filter(|record| record.altitude_range.band() == band)
                .count() as u64;
            (count > 0).then_some((band, count))
        })
        .collect()
}

/// Proportion of `count` in `total` as a percentage, clamped to [0, 100].
/// Zero totals yield exactly 0.0, never NaN.
#[must_use]
pub fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Sightings dated within the recent window ending at `as_of`, inclusive on
/// both ends. Future-dated sightings are not recent.
#[must_use]
pub fn recent_sighting_count(sightings: &[SightingRecord], as_of: NaiveDate) -> u64 {
    let window_start = as_of
        .checked_sub_days(Days::new(RECENT_SIGHTING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    sightings
        .iter()
        .filter(|sighting| sighting.date >= window_start && sighting.date <= as_of)
        .count() as u64
}

#[must_use]
fn threat_level_counts(species: &[SpeciesRecord]) -> ThreatLevelCounts {
    let mut counts = ThreatLevelCounts::default();
    for record in species {
        match record.threat_level {
            ThreatLevel::Critical => counts.critical += 1,
            ThreatLevel::High => counts.high += 1,
            ThreatLevel::Medium => counts.medium += 1,
            ThreatLevel::Low => counts.low += 1,
            _ => {}
        }
    }
    counts
}

/// Assembles the summary snapshot: derived figures from the collections,
/// everything else merged verbatim from the curated ledger.
#[must_use]
pub fn compute_stats(
    species: &[SpeciesRecord],
    sightings: &[SightingRecord],
    ledger: &RegionLedger,
    as_of: NaiveDate,
) -> StatsSnapshot {
    let altitude_zones: BTreeMap<String, u64> = altitude_zone_counts(species)
        .into_iter()
        .map(|(band, count)| (band.as_str().to_string(), count))
        .collect();
    StatsSnapshot {
        total_species: species.len() as u64,
        total_population: species.iter().map(|record| record.population).sum(),
        endangered_species: species
            .iter()
            .filter(|record| record.status.is_endangered())
            .count() as u64,
        recent_sightings: recent_sighting_count(sightings, as_of),
        protected_areas: ledger.protected_areas,
        active_researchers: ledger.active_researchers,
        conservation_projects: ledger.conservation_projects,
        forest_divisions: ledger.forest_divisions,
        national_parks: ledger.national_parks,
        wildlife_sanctuaries: ledger.wildlife_sanctuaries,
        tiger_reserves: ledger.tiger_reserves,
        threat_levels: threat_level_counts(species),
        altitude_zones,
        conservation_success: ledger.conservation_success,
        as_of,
    }
}
