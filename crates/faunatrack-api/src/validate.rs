// SPDX-License-Identifier: Apache-2.0

use crate::dto::SubmitSightingRequest;
use chrono::NaiveDate;
use faunatrack_model::{
    HealthStatus, NewSighting, SpeciesRecord, GROUP_SIZE_MAX, NAME_MAX_LEN, TEXT_MAX_LEN,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

fn require_name(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    } else if value.len() > NAME_MAX_LEN {
        errors.push(FieldError::new(
            field,
            format!("exceeds max length {NAME_MAX_LEN}"),
        ));
    }
}

fn check_free_text(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.len() > TEXT_MAX_LEN {
        errors.push(FieldError::new(
            field,
            format!("exceeds max length {TEXT_MAX_LEN}"),
        ));
    }
}

/// Validates a submission against the species catalog and, on success,
/// produces the store-bound record with the resolved species association.
///
/// Every failure is reported as a field-level error; nothing is silently
/// corrected or fabricated. `today` becomes the observation date when the
/// submission carries none.
pub fn validate_submission(
    request: &SubmitSightingRequest,
    catalog: &[SpeciesRecord],
    today: NaiveDate,
) -> Result<NewSighting, Vec<FieldError>> {
    let mut errors = Vec::new();

    let resolved = match request.animal_id {
        Some(id) => match catalog.iter().find(|record| record.id == id) {
            Some(record) => Some(record),
            None => {
                errors.push(FieldError::new("animal_id", "no such species"));
                None
            }
        },
        None => {
            let wanted = request.species.trim();
            if wanted.is_empty() {
                errors.push(FieldError::new("species", "must not be empty"));
                None
            } else {
                let matched = catalog
                    .iter()
                    .find(|record| record.species.eq_ignore_ascii_case(wanted));
                if matched.is_none() {
                    errors.push(FieldError::new(
                        "species",
                        "does not match any catalogued species",
                    ));
                }
                matched
            }
        }
    };

    require_name(&mut errors, "location", &request.location);
    require_name(&mut errors, "observer", &request.observer);

    let coordinates = match request.coordinates {
        Some(point) => match point.validate() {
            Ok(()) => Some(point),
            Err(err) => {
                errors.push(FieldError::new("coordinates", err.to_string()));
                None
            }
        },
        None => {
            errors.push(FieldError::new("coordinates", "required"));
            None
        }
    };

    if request.group_size == 0 {
        errors.push(FieldError::new("group_size", "must be >= 1"));
    } else if request.group_size > GROUP_SIZE_MAX {
        errors.push(FieldError::new(
            "group_size",
            format!("must be <= {GROUP_SIZE_MAX}"),
        ));
    }

    let health_status = match HealthStatus::parse(&request.health_status) {
        Ok(status) => Some(status),
        Err(err) => {
            errors.push(FieldError::new("health_status", err.to_string()));
            None
        }
    };

    if let Some(date) = request.date {
        if date > today {
            errors.push(FieldError::new("date", "must not be in the future"));
        }
    }

    check_free_text(&mut errors, "behavior", &request.behavior);
    check_free_text(&mut errors, "notes", &request.notes);
    if let Some(range) = &request.forest_range {
        check_free_text(&mut errors, "forest_range", range);
    }
    if let Some(weather) = &request.weather {
        check_free_text(&mut errors, "weather", weather);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All Nones were reported above, so these are present.
    let (species, health_status, coordinates) = match (resolved, health_status, coordinates) {
        (Some(species), Some(health), Some(point)) => (species, health, point),
        _ => return Err(vec![FieldError::new("request", "validation incomplete")]),
    };

    Ok(NewSighting {
        animal_id: species.id,
        species: species.species.clone(),
        location: request.location.trim().to_string(),
        coordinates,
        date: request.date.unwrap_or(today),
        observer: request.observer.trim().to_string(),
        behavior: request.behavior.clone(),
        group_size: request.group_size,
        health_status,
        notes: request.notes.clone(),
        forest_range: request.forest_range.clone(),
        weather: request.weather.clone(),
    })
}
