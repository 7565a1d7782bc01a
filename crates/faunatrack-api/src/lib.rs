#![forbid(unsafe_code)]
//! Faunatrack wire contract: request DTOs, the error envelope with stable
//! codes, query-parameter parsing, and submission validation.

mod dto;
mod errors;
mod params;
mod validate;

pub use dto::SubmitSightingRequest;
pub use errors::{ApiError, ApiErrorCode};
pub use params::{parse_animals_params, AnimalsView};
pub use validate::{validate_submission, FieldError};

pub const CRATE_NAME: &str = "faunatrack-api";
pub const API_VERSION: &str = "v1";
