//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from API/IO errors raised by the collaborator clients.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude outside its valid range, or not finite
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(&'static str),

    /// A route candidate must carry at least one point
    #[error("route candidate has no geometry")]
    EmptyGeometry,

    /// A scoring result must cover at least one scored route
    #[error("scoring result must contain at least one route")]
    EmptyResult,

    /// Best-route index points outside the scored route list
    #[error("best route index {index} out of bounds for {len} routes")]
    BestIndexOutOfBounds { index: usize, len: usize },
}
