// SPDX-License-Identifier: Apache-2.0

use crate::ids::{check_name, check_text, ParseError, SightingId, SpeciesId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const GROUP_SIZE_MAX: u32 = 500;

/// Observed condition of the sighted animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[non_exhaustive]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Injured,
}

impl HealthStatus {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Excellent" => Ok(Self::Excellent),
            "Good" => Ok(Self::Good),
            "Fair" => Ok(Self::Fair),
            "Poor" => Ok(Self::Poor),
            "Injured" => Ok(Self::Injured),
            _ => Err(ParseError::InvalidFormat(
                "health status must be Excellent, Good, Fair, Poor, or Injured",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Injured => "Injured",
        }
    }
}

impl Display for HealthStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WGS84 point. Constructors reject non-finite and out-of-bounds values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, ParseError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(ParseError::InvalidFormat("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ParseError::OutOfRange("latitude"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ParseError::OutOfRange("longitude"));
        }
        Ok(Self { lat, lng })
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        Self::new(self.lat, self.lng).map(|_| ())
    }
}

/// One field observation, as served and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SightingRecord {
    pub id: SightingId,
    pub animal_id: SpeciesId,
    pub species: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub date: NaiveDate,
    pub observer: String,
    pub behavior: String,
    pub group_size: u32,
    pub health_status: HealthStatus,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forest_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
}

impl SightingRecord {
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.id.get() == 0 {
            return Err(ParseError::Zero("sighting id"));
        }
        check_name("species name", &self.species)?;
        check_name("location", &self.location)?;
        check_name("observer", &self.observer)?;
        self.coordinates.validate()?;
        if self.group_size == 0 {
            return Err(ParseError::Zero("group size"));
        }
        if self.group_size > GROUP_SIZE_MAX {
            return Err(ParseError::OutOfRange("group size"));
        }
        check_text("behavior", &self.behavior)?;
        check_text("notes", &self.notes)?;
        Ok(())
    }
}

/// A validated, server-bound sighting creation: everything a `SightingRecord`
/// carries except the store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSighting {
    pub animal_id: SpeciesId,
    pub species: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub date: NaiveDate,
    pub observer: String,
    pub behavior: String,
    pub group_size: u32,
    pub health_status: HealthStatus,
    pub notes: String,
    pub forest_range: Option<String>,
    pub weather: Option<String>,
}

impl NewSighting {
    #[must_use]
    pub fn into_record(self, id: SightingId) -> SightingRecord {
        SightingRecord {
            id,
            animal_id: self.animal_id,
            species: self.species,
            location: self.location,
            coordinates: self.coordinates,
            date: self.date,
            observer: self.observer,
            behavior: self.behavior,
            group_size: self.group_size,
            health_status: self.health_status,
            notes: self.notes,
            forest_range: self.forest_range,
            weather: self.weather,
        }
    }
}
