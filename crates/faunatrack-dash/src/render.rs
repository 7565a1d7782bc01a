// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering for terminal output. Everything returns a `String`
//! so the CLI can decide where it goes.

use faunatrack_model::{SightingRecord, SpeciesRecord, StatsSnapshot};
use std::fmt::Write as _;

#[must_use]
pub fn species_table(species: &[&SpeciesRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<24} {:<28} {:<22} {:>10} {:<10}",
        "ID", "SPECIES", "SCIENTIFIC NAME", "STATUS", "POPULATION", "THREAT"
    );
    for record in species {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:<28} {:<22} {:>10} {:<10}",
            record.id.get(),
            record.species,
            record.scientific_name,
            record.status,
            record.population,
            record.threat_level,
        );
    }
    if species.is_empty() {
        out.push_str("(no species match the current filters)\n");
    }
    out
}

#[must_use]
pub fn sightings_table(sightings: &[SightingRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<24} {:<26} {:<12} {:>5} {:<10} {:<18}",
        "ID", "SPECIES", "LOCATION", "DATE", "GROUP", "HEALTH", "OBSERVER"
    );
    for record in sightings {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:<26} {:<12} {:>5} {:<10} {:<18}",
            record.id.get(),
            record.species,
            record.location,
            record.date,
            record.group_size,
            record.health_status,
            record.observer,
        );
    }
    if sightings.is_empty() {
        out.push_str("(no sightings recorded)\n");
    }
    out
}

#[must_use]
pub fn stats_report(stats: &StatsSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Region summary as of {}", stats.as_of);
    let _ = writeln!(
        out,
        "  species {}  population {}  endangered {}  recent sightings {}",
        stats.total_species, stats.total_population, stats.endangered_species,
        stats.recent_sightings
    );
    let _ = writeln!(
        out,
        "  protected areas {}  national parks {}  sanctuaries {}  tiger reserves {}",
        stats.protected_areas, stats.national_parks, stats.wildlife_sanctuaries,
        stats.tiger_reserves
    );
    let _ = writeln!(
        out,
        "  researchers {}  projects {}  forest divisions {}",
        stats.active_researchers, stats.conservation_projects, stats.forest_divisions
    );
    let levels = &stats.threat_levels;
    let _ = writeln!(
        out,
        "Threat levels: critical {}  high {}  medium {}  low {}",
        levels.critical, levels.high, levels.medium, levels.low
    );
    out.push_str("Altitude zones:\n");
    for (zone, count) in &stats.altitude_zones {
        let _ = writeln!(out, "  {zone:<24} {count}");
    }
    let wins = &stats.conservation_success;
    let _ = writeln!(
        out,
        "Programme outcomes: tiger +{}%  corridors {}  community programs {}  anti-poaching ops {}",
        wins.tiger_population_increase,
        wins.elephant_corridor_established,
        wins.community_programs,
        wins.anti_poaching_operations
    );
    out
}
