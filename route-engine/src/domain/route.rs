//! Route candidate and scoring result types.

use serde::{Deserialize, Serialize};

use super::{Coordinate, DomainError};

/// One alternative route geometry returned by the directions provider.
///
/// Candidates are built once per provider response and never mutated.
/// Construction rejects empty geometry: a route with no points cannot be
/// meaningfully scored and indicates malformed provider data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    points: Vec<Coordinate>,
    distance_label: String,
    duration_label: String,
}

impl RouteCandidate {
    /// Construct a candidate from decoded geometry and the provider's
    /// human-readable distance/duration labels.
    pub fn new(
        points: Vec<Coordinate>,
        distance_label: impl Into<String>,
        duration_label: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if points.is_empty() {
            return Err(DomainError::EmptyGeometry);
        }
        Ok(Self {
            points,
            distance_label: distance_label.into(),
            duration_label: duration_label.into(),
        })
    }

    /// The route geometry, in travel order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Provider-reported distance, e.g. "4.2 km".
    pub fn distance_label(&self) -> &str {
        &self.distance_label
    }

    /// Provider-reported duration, e.g. "12 mins".
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }
}

/// A candidate route together with its computed safety figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRoute {
    /// The route that was scored.
    pub candidate: RouteCandidate,

    /// Total incident hits across all sampled points. Overlapping sample
    /// radii may count the same incident more than once; routes that
    /// linger near a hotspot pay for it repeatedly.
    pub incident_count: u64,

    /// Safety score in `[0, 100]`; higher is safer.
    pub safety_score: u8,
}

/// The outcome of scoring one origin/destination request.
///
/// `scored_routes` preserves the provider's original candidate order, not
/// score order; `best_index` points at the recommended route within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    start: Coordinate,
    end: Coordinate,
    scored_routes: Vec<ScoredRoute>,
    best_index: usize,
}

impl ScoringResult {
    /// Construct a result, enforcing that at least one route was scored
    /// and that `best_index` is in bounds.
    pub fn new(
        start: Coordinate,
        end: Coordinate,
        scored_routes: Vec<ScoredRoute>,
        best_index: usize,
    ) -> Result<Self, DomainError> {
        if scored_routes.is_empty() {
            return Err(DomainError::EmptyResult);
        }
        if best_index >= scored_routes.len() {
            return Err(DomainError::BestIndexOutOfBounds {
                index: best_index,
                len: scored_routes.len(),
            });
        }
        Ok(Self {
            start,
            end,
            scored_routes,
            best_index,
        })
    }

    /// Resolved start coordinate.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Resolved end coordinate.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// All scored routes, in the provider's original order.
    pub fn scored_routes(&self) -> &[ScoredRoute] {
        &self.scored_routes
    }

    /// Index of the recommended route within [`Self::scored_routes`].
    pub fn best_index(&self) -> usize {
        self.best_index
    }

    /// The recommended route.
    pub fn best(&self) -> &ScoredRoute {
        &self.scored_routes[self.best_index]
    }
}
