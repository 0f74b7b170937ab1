//! Incident store contract and geospatial query adapter.
//!
//! The engine never owns incident persistence; it reads from any backend
//! implementing [`IncidentStore`]. The [`IncidentQueries`] adapter turns a
//! point-plus-radius question into the store's bounding-box contract.

mod memory;
mod nearby;
mod store;

pub use memory::InMemoryIncidentStore;
pub use nearby::{IncidentQueries, KM_TO_DEG};
pub use store::{BoundingBox, IncidentStore, StoreError};
