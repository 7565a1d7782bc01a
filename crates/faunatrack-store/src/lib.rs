#![forbid(unsafe_code)]
//! Canonical ownership of the faunatrack collections. The store seeds once,
//! appends sightings, and never deletes or mutates in place; readers get
//! point-in-time clones.

mod memory;
pub mod seed;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use faunatrack_model::{NewSighting, SightingRecord, SpeciesRecord, StatsSnapshot};
use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "faunatrack-store";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    InvalidRecord(String),
    NotSeeded,
}

impl StoreError {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRecord(_) => "invalid_record",
            Self::NotSeeded => "not_seeded",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecord(msg) => write!(f, "invalid record: {msg}"),
            Self::NotSeeded => f.write_str("store is not seeded"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read/append seam over the canonical collections. Reads return owned
/// point-in-time copies; the only write is the append of one sighting.
#[async_trait]
pub trait ObservationStore: Send + Sync {
    async fn list_species(&self) -> Result<Vec<SpeciesRecord>, StoreError>;

    async fn list_sightings(&self) -> Result<Vec<SightingRecord>, StoreError>;

    /// Appends one sighting with a store-assigned id and returns the
    /// created record. Rejects records that fail model validation; on
    /// rejection nothing is written.
    async fn append_sighting(&self, sighting: NewSighting)
        -> Result<SightingRecord, StoreError>;

    /// Assembles the summary snapshot for `as_of` from the current
    /// collections and the curated ledger. Fails with `NotSeeded` until
    /// seed data is loaded; a snapshot over an empty catalog is
    /// meaningless.
    async fn stats(&self, as_of: NaiveDate) -> Result<StatsSnapshot, StoreError>;

    /// True once seed data is loaded; readiness gates on it.
    fn is_seeded(&self) -> bool;
}
