// SPDX-License-Identifier: Apache-2.0

use crate::ids::{check_name, check_text, ParseError, SpeciesId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Upper bound on altitude figures, metres. Nothing in the Himalaya tops it.
pub const ALTITUDE_MAX_M: u32 = 9000;

/// IUCN-style conservation status. Wire strings match the published catalog
/// exactly ("Critically Endangered", not "critically_endangered").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[non_exhaustive]
pub enum ConservationStatus {
    #[serde(rename = "Critically Endangered")]
    CriticallyEndangered,
    Endangered,
    Vulnerable,
    #[serde(rename = "Near Threatened")]
    NearThreatened,
    #[serde(rename = "Least Concern")]
    LeastConcern,
}

impl ConservationStatus {
    pub const ALL: [Self; 5] = [
        Self::CriticallyEndangered,
        Self::Endangered,
        Self::Vulnerable,
        Self::NearThreatened,
        Self::LeastConcern,
    ];

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Critically Endangered" => Ok(Self::CriticallyEndangered),
            "Endangered" => Ok(Self::Endangered),
            "Vulnerable" => Ok(Self::Vulnerable),
            "Near Threatened" => Ok(Self::NearThreatened),
            "Least Concern" => Ok(Self::LeastConcern),
            _ => Err(ParseError::InvalidFormat(
                "status must be one of the IUCN labels",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CriticallyEndangered => "Critically Endangered",
            Self::Endangered => "Endangered",
            Self::Vulnerable => "Vulnerable",
            Self::NearThreatened => "Near Threatened",
            Self::LeastConcern => "Least Concern",
        }
    }

    /// True for the two statuses counted as "endangered" on the stat cards.
    #[must_use]
    pub const fn is_endangered(self) -> bool {
        matches!(self, Self::CriticallyEndangered | Self::Endangered)
    }
}

impl Display for ConservationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threat severity, independent of conservation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[non_exhaustive]
pub enum ThreatLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl ThreatLevel {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Critical" => Ok(Self::Critical),
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            _ => Err(ParseError::InvalidFormat(
                "threat level must be Critical, High, Medium, or Low",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl Display for ThreatLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four fixed elevation bands species are bucketed into, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[non_exhaustive]
pub enum AltitudeBand {
    #[serde(rename = "Low Hills (200-1000m)")]
    LowHills,
    #[serde(rename = "Mid Hills (1000-2500m)")]
    MidHills,
    #[serde(rename = "High Hills (2500-4000m)")]
    HighHills,
    #[serde(rename = "Alpine (4000m+)")]
    Alpine,
}

impl AltitudeBand {
    pub const ALL: [Self; 4] = [
        Self::LowHills,
        Self::MidHills,
        Self::HighHills,
        Self::Alpine,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowHills => "Low Hills (200-1000m)",
            Self::MidHills => "Mid Hills (1000-2500m)",
            Self::HighHills => "High Hills (2500-4000m)",
            Self::Alpine => "Alpine (4000m+)",
        }
    }
}

impl Display for AltitudeBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elevation range a species occupies, metres above sea level.
/// Serialized as the display string the catalog uses, e.g. `"330-1200m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct AltitudeRange {
    low_m: u32,
    high_m: u32,
}

impl AltitudeRange {
    pub fn new(low_m: u32, high_m: u32) -> Result<Self, ParseError> {
        if low_m > high_m {
            return Err(ParseError::InvalidFormat(
                "altitude range low must be <= high",
            ));
        }
        if high_m >= ALTITUDE_MAX_M {
            return Err(ParseError::OutOfRange("altitude range"));
        }
        Ok(Self { low_m, high_m })
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let stripped = raw.trim().strip_suffix('m').ok_or(ParseError::InvalidFormat(
            "altitude range must be in low-high metres form, e.g. 330-1200m",
        ))?;
        let (low_raw, high_raw) = stripped.split_once('-').ok_or(ParseError::InvalidFormat(
            "altitude range must be in low-high metres form, e.g. 330-1200m",
        ))?;
        let low_m = low_raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat("altitude range low must be integer metres"))?;
        let high_m = high_raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat("altitude range high must be integer metres"))?;
        Self::new(low_m, high_m)
    }

    #[must_use]
    pub const fn low_m(self) -> u32 {
        self.low_m
    }

    #[must_use]
    pub const fn high_m(self) -> u32 {
        self.high_m
    }

    /// Band the range falls into, by the midpoint of the span.
    #[must_use]
    pub const fn band(self) -> AltitudeBand {
        let midpoint = (self.low_m + self.high_m) / 2;
        if midpoint < 1000 {
            AltitudeBand::LowHills
        } else if midpoint < 2500 {
            AltitudeBand::MidHills
        } else if midpoint < 4000 {
            AltitudeBand::HighHills
        } else {
            AltitudeBand::Alpine
        }
    }
}

impl TryFrom<String> for AltitudeRange {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AltitudeRange> for String {
    fn from(value: AltitudeRange) -> Self {
        value.to_string()
    }
}

impl Display for AltitudeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}m", self.low_m, self.high_m)
    }
}

/// One catalogued species. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeciesRecord {
    pub id: SpeciesId,
    pub species: String,
    pub scientific_name: String,
    pub status: ConservationStatus,
    pub population: u64,
    pub habitat: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forest_division: Option<String>,
    pub last_sighting: NaiveDate,
    pub threat_level: ThreatLevel,
    pub conservation_efforts: String,
    pub image_url: String,
    pub weight_range: String,
    pub lifespan: String,
    pub diet: String,
    pub altitude_range: AltitudeRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
}

impl SpeciesRecord {
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.id.get() == 0 {
            return Err(ParseError::Zero("species id"));
        }
        check_name("species name", &self.species)?;
        check_name("scientific name", &self.scientific_name)?;
        if let Some(local) = &self.local_name {
            check_name("local name", local)?;
        }
        check_text("habitat", &self.habitat)?;
        check_text("location", &self.location)?;
        check_text("conservation efforts", &self.conservation_efforts)?;
        Ok(())
    }

    /// True when any name field contains `term` case-insensitively.
    /// Empty terms match everything.
    #[must_use]
    pub fn name_matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.species.to_lowercase().contains(&needle)
            || self.scientific_name.to_lowercase().contains(&needle)
            || self
                .local_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
    }
}

/// Rejects collections with duplicate ids. Population is non-negative by
/// construction (u64), so uniqueness is the only cross-record invariant.
pub fn validate_species_collection(records: &[SpeciesRecord]) -> Result<(), ParseError> {
    let mut seen = std::collections::BTreeSet::new();
    for record in records {
        record.validate()?;
        if !seen.insert(record.id) {
            return Err(ParseError::InvalidFormat(
                "species ids must be unique within a collection",
            ));
        }
    }
    Ok(())
}
