//! Domain types for the route safety engine.
//!
//! This module contains the core value types shared across the engine.
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod coordinate;
mod error;
mod incident;
mod route;

pub use coordinate::Coordinate;
pub use error::DomainError;
pub use incident::IncidentRecord;
pub use route::{RouteCandidate, ScoredRoute, ScoringResult};
