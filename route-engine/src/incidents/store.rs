//! Incident store trait and bounding-box query types.

use crate::domain::{Coordinate, IncidentRecord};

/// Errors from an incident store backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or failed mid-query
    #[error("incident store unavailable: {0}")]
    Unavailable(String),

    /// The query exceeded its time budget
    #[error("incident store query timed out")]
    Timeout,
}

/// An axis-aligned latitude/longitude range.
///
/// Bounds are **exclusive**: a point sitting exactly on an edge is outside
/// the box. This matches the radius query it approximates, where a record
/// at exactly the radius offset does not count as nearby.
///
/// Boxes do not wrap the antimeridian and are not clamped at the poles;
/// they are only meaningful for the small radii the scorer uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern latitude bound (exclusive).
    pub lat_min: f64,
    /// Northern latitude bound (exclusive).
    pub lat_max: f64,
    /// Western longitude bound (exclusive).
    pub lng_min: f64,
    /// Eastern longitude bound (exclusive).
    pub lng_max: f64,
}

impl BoundingBox {
    /// Box of half-width `radius_deg` centred on `point`.
    pub fn around(point: Coordinate, radius_deg: f64) -> Self {
        Self {
            lat_min: point.latitude() - radius_deg,
            lat_max: point.latitude() + radius_deg,
            lng_min: point.longitude() - radius_deg,
            lng_max: point.longitude() + radius_deg,
        }
    }

    /// Whether `point` lies strictly inside the box.
    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude() > self.lat_min
            && point.latitude() < self.lat_max
            && point.longitude() > self.lng_min
            && point.longitude() < self.lng_max
    }
}

/// A queryable source of historical incidents.
///
/// This abstraction is the seam between the scoring engine and whatever
/// holds the incident data (a pooled database in production, an in-memory
/// list in tests). Implementations must be read-only with respect to the
/// engine: a query never mutates the store. Backends must not return two
/// records with the same id within one call.
pub trait IncidentStore {
    /// Return all records inside the box.
    ///
    /// A backend failure must surface as an error, never as an empty
    /// result; callers distinguish "no incidents" from "query failed".
    fn query_bbox(
        &self,
        bbox: BoundingBox,
    ) -> impl Future<Output = Result<Vec<IncidentRecord>, StoreError>> + Send;
}
