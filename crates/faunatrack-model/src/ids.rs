// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 128;
pub const TEXT_MAX_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    TooLong(&'static str, usize),
    Zero(&'static str),
    InvalidFormat(&'static str),
    OutOfRange(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::Zero(name) => write!(f, "{name} must be >= 1"),
            Self::InvalidFormat(msg) => f.write_str(msg),
            Self::OutOfRange(name) => write!(f, "{name} is out of range"),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct SpeciesId(u64);

impl SpeciesId {
    pub fn new(raw: u64) -> Result<Self, ParseError> {
        if raw == 0 {
            return Err(ParseError::Zero("species id"));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for SpeciesId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct SightingId(u64);

impl SightingId {
    pub fn new(raw: u64) -> Result<Self, ParseError> {
        if raw == 0 {
            return Err(ParseError::Zero("sighting id"));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for SightingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) fn check_name(field: &'static str, value: &str) -> Result<(), ParseError> {
    if value.trim().is_empty() {
        return Err(ParseError::Empty(field));
    }
    if value.len() > NAME_MAX_LEN {
        return Err(ParseError::TooLong(field, NAME_MAX_LEN));
    }
    Ok(())
}

pub(crate) fn check_text(field: &'static str, value: &str) -> Result<(), ParseError> {
    if value.len() > TEXT_MAX_LEN {
        return Err(ParseError::TooLong(field, TEXT_MAX_LEN));
    }
    Ok(())
}
