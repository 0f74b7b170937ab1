//! Point-plus-radius queries over a bounding-box store.

use std::time::Duration;

use crate::domain::{Coordinate, IncidentRecord};

use super::store::{BoundingBox, IncidentStore, StoreError};

/// Degrees per kilometre. A flat-earth approximation: it ignores latitude
/// convergence and is only valid for the small radii (a few hundred
/// metres) this engine queries at mid latitudes.
pub const KM_TO_DEG: f64 = 0.009;

/// Geospatial query adapter over an [`IncidentStore`].
///
/// Converts a point and radius into the store's bounding-box contract and
/// enforces a per-query time budget. The box over-selects near its corners
/// relative to a true circle; acceptable at these radii.
pub struct IncidentQueries<'a, S> {
    store: &'a S,
    timeout: Duration,
}

impl<'a, S: IncidentStore> IncidentQueries<'a, S> {
    /// Create an adapter with the given per-query timeout.
    pub fn new(store: &'a S, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Return all incidents within `radius_km` of `point` (bounding-box
    /// approximation, exclusive at the boundary).
    ///
    /// A query that outlives the time budget fails with
    /// [`StoreError::Timeout`] rather than hanging; backend failures
    /// propagate unchanged. No ordering is guaranteed.
    pub async fn query_nearby(
        &self,
        point: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<IncidentRecord>, StoreError> {
        let radius_deg = radius_km * KM_TO_DEG;
        let bbox = BoundingBox::around(point, radius_deg);

        match tokio::time::timeout(self.timeout, self.store.query_bbox(bbox)).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout),
        }
    }
}
