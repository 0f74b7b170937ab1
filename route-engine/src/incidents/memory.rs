//! In-memory incident store backend.
//!
//! Serves incidents from a plain vector as if they came from a real
//! backend. Used in tests and local development without a database;
//! production implements [`IncidentStore`] over its own pool.

use std::collections::HashSet;

use crate::domain::IncidentRecord;

use super::store::{BoundingBox, IncidentStore, StoreError};

/// Incident store backed by an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIncidentStore {
    records: Vec<IncidentRecord>,
}

impl InMemoryIncidentStore {
    /// Create a store holding the given records.
    pub fn new(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IncidentStore for InMemoryIncidentStore {
    async fn query_bbox(&self, bbox: BoundingBox) -> Result<Vec<IncidentRecord>, StoreError> {
        let mut seen = HashSet::new();

        let matches = self
            .records
            .iter()
            .filter(|record| bbox.contains(record.location))
            .filter(|record| seen.insert(record.id))
            .cloned()
            .collect();

        Ok(matches)
    }
}
