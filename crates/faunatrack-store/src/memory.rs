// SPDX-License-Identifier: Apache-2.0

use crate::{seed, ObservationStore, StoreError};
use async_trait::async_trait;
use chrono::NaiveDate;
use faunatrack_model::{
    validate_species_collection, NewSighting, RegionLedger, SightingId, SightingRecord,
    SpeciesRecord, StatsSnapshot,
};
use tokio::sync::RwLock;

/// In-memory store: seed-once vectors behind an `RwLock`, append-only
/// sightings with monotonically increasing ids.
pub struct MemoryStore {
    species: RwLock<Vec<SpeciesRecord>>,
    sightings: RwLock<Vec<SightingRecord>>,
    ledger: RegionLedger,
    seeded: bool,
}

impl MemoryStore {
    /// Store loaded with the Uttarakhand seed dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_collections(
            seed::uttarakhand_species(),
            seed::uttarakhand_sightings(),
            seed::region_ledger(),
        )
    }

    #[must_use]
    pub fn with_collections(
        species: Vec<SpeciesRecord>,
        sightings: Vec<SightingRecord>,
        ledger: RegionLedger,
    ) -> Self {
        debug_assert!(validate_species_collection(&species).is_ok());
        let seeded = !species.is_empty();
        Self {
            species: RwLock::new(species),
            sightings: RwLock::new(sightings),
            ledger,
            seeded,
        }
    }

    /// Empty, unseeded store. Readiness stays false.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_collections(Vec::new(), Vec::new(), seed::region_ledger())
    }
}

#[async_trait]
impl ObservationStore for MemoryStore {
    async fn list_species(&self) -> Result<Vec<SpeciesRecord>, StoreError> {
        Ok(self.species.read().await.clone())
    }

    async fn list_sightings(&self) -> Result<Vec<SightingRecord>, StoreError> {
        Ok(self.sightings.read().await.clone())
    }

    async fn append_sighting(
        &self,
        sighting: NewSighting,
    ) -> Result<SightingRecord, StoreError> {
        let mut sightings = self.sightings.write().await;
        let next_id = sightings
            .iter()
            .map(|record| record.id.get())
            .max()
            .unwrap_or(0)
            + 1;
        let id = SightingId::new(next_id)
            .map_err(|err| StoreError::InvalidRecord(err.to_string()))?;
        let record = sighting.into_record(id);
        record
            .validate()
            .map_err(|err| StoreError::InvalidRecord(err.to_string()))?;
        sightings.push(record.clone());
        Ok(record)
    }

    async fn stats(&self, as_of: NaiveDate) -> Result<StatsSnapshot, StoreError> {
        if !self.seeded {
            return Err(StoreError::NotSeeded);
        }
        let species = self.species.read().await;
        let sightings = self.sightings.read().await;
        Ok(faunatrack_query::compute_stats(
            &species,
            &sightings,
            &self.ledger,
            as_of,
        ))
    }

    fn is_seeded(&self) -> bool {
        self.seeded
    }
}
