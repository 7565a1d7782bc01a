// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use std::collections::BTreeMap;

/// Which collection `/api/animals` serves. The bare path lists species;
/// `?type=sightings` switches to the sightings feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalsView {
    Species,
    Sightings,
}

pub fn parse_animals_params(query: &BTreeMap<String, String>) -> Result<AnimalsView, ApiError> {
    for key in query.keys() {
        if key != "type" {
            return Err(ApiError::invalid_param(key, query[key].as_str()));
        }
    }
    match query.get("type").map(String::as_str) {
        None => Ok(AnimalsView::Species),
        Some("sightings") => Ok(AnimalsView::Sightings),
        Some(other) => Err(ApiError::invalid_param("type", other)),
    }
}
