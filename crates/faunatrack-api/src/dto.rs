// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use faunatrack_model::{Coordinates, SpeciesId};
use serde::{Deserialize, Serialize};

/// Inbound body of `POST /api/animals?type=sightings`.
///
/// The species must resolve: either `animal_id` names an existing species,
/// or `species` matches a catalog common name case-insensitively.
/// Coordinates are required and bounds-checked; nothing is fabricated
/// server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitSightingRequest {
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_id: Option<SpeciesId>,
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub observer: String,
    #[serde(default)]
    pub behavior: String,
    pub group_size: u32,
    pub health_status: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forest_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
}
