// SPDX-License-Identifier: Apache-2.0

//! Pure view-model for the dashboard. Every transition consumes the state
//! and returns the next one; nothing here does IO.

use crate::client::DashboardData;
use faunatrack_model::{AltitudeBand, ConservationStatus, SpeciesRecord};
use faunatrack_query::{
    altitude_zone_counts, filter_species, group_by_status, percentage_of, StatusFilter,
};

/// Load lifecycle. `Ready` is entered at most once; `Failed` is terminal
/// and a fresh state must be built to retry.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready(DashboardData),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    phase: Phase,
    search: String,
    status_filter: StatusFilter,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            search: String::new(),
            status_filter: StatusFilter::All,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Completes the load. Ignored unless still loading.
    #[must_use]
    pub fn loaded(self, data: DashboardData) -> Self {
        match self.phase {
            Phase::Loading => Self {
                phase: Phase::Ready(data),
                ..self
            },
            _ => self,
        }
    }

    /// Fails the load. Ignored unless still loading.
    #[must_use]
    pub fn failed(self, message: impl Into<String>) -> Self {
        match self.phase {
            Phase::Loading => Self {
                phase: Phase::Failed(message.into()),
                ..self
            },
            _ => self,
        }
    }

    #[must_use]
    pub fn with_search(self, term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_status_filter(self, filter: StatusFilter) -> Self {
        Self {
            status_filter: filter,
            ..self
        }
    }

    fn data(&self) -> Option<&DashboardData> {
        match &self.phase {
            Phase::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Species passing the current search term and status filter, in
    /// catalog order. Empty before the load completes.
    #[must_use]
    pub fn visible_species(&self) -> Vec<&SpeciesRecord> {
        self.data().map_or_else(Vec::new, |data| {
            filter_species(&data.species, &self.search, self.status_filter)
        })
    }

    /// Status buckets over the whole catalog with each bucket's share,
    /// first-seen order.
    #[must_use]
    pub fn status_distribution(&self) -> Vec<(ConservationStatus, u64, f64)> {
        let Some(data) = self.data() else {
            return Vec::new();
        };
        let counts = group_by_status(&data.species);
        let total = counts.total();
        counts
            .iter()
            .map(|(status, count)| (status, count, percentage_of(count, total)))
            .collect()
    }

    /// Elevation-band buckets with shares, ascending bands, zero bands
    /// omitted.
    #[must_use]
    pub fn altitude_distribution(&self) -> Vec<(AltitudeBand, u64, f64)> {
        let Some(data) = self.data() else {
            return Vec::new();
        };
        let counts = altitude_zone_counts(&data.species);
        let total: u64 = counts.iter().map(|(_, count)| count).sum();
        counts
            .into_iter()
            .map(|(band, count)| (band, count, percentage_of(count, total)))
            .collect()
    }
}

/// Submission side of the view-model: a one-shot idle/submitting machine.
/// Failure keeps the draft so the observer can correct and resubmit;
/// success clears it.
#[derive(Debug, Clone, PartialEq)]
pub enum SightingForm {
    Idle { last_error: Option<String> },
    Submitting,
}

impl Default for SightingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SightingForm {
    #[must_use]
    pub fn new() -> Self {
        Self::Idle { last_error: None }
    }

    /// Moves to `Submitting`. A second submit while one is in flight is
    /// rejected.
    pub fn begin_submit(self) -> Result<Self, Self> {
        match self {
            Self::Idle { .. } => Ok(Self::Submitting),
            Self::Submitting => Err(self),
        }
    }

    #[must_use]
    pub fn complete_success(self) -> Self {
        Self::Idle { last_error: None }
    }

    #[must_use]
    pub fn complete_failure(self, message: impl Into<String>) -> Self {
        Self::Idle {
            last_error: Some(message.into()),
        }
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        match self {
            Self::Idle { last_error } => last_error.as_deref(),
            Self::Submitting => None,
        }
    }
}
