//! Per-route safety scoring.

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

use crate::domain::RouteCandidate;
use crate::incidents::{IncidentQueries, IncidentStore, StoreError};

use super::config::ScoringConfig;
use super::sample::sample_points;

/// The computed safety figures for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteScore {
    /// Total incident hits across all sampled points.
    pub incident_count: u64,

    /// Safety score in `[0, 100]`; higher is safer.
    pub safety_score: u8,
}

/// Convert an incident count into a safety score.
///
/// Linear penalty with a floor at zero:
/// `score = max(0, 100 - incident_count * penalty)`.
pub fn score_from_count(incident_count: u64, penalty_per_incident: u32) -> u8 {
    let penalty = incident_count.saturating_mul(u64::from(penalty_per_incident));
    100u64.saturating_sub(penalty) as u8
}

/// Scores a single route against an incident store.
#[derive(Debug, Clone, Copy)]
pub struct SafetyScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> SafetyScorer<'a> {
    /// Create a scorer with the given configuration.
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Score one candidate route.
    ///
    /// Samples the geometry, queries incidents around every sampled point
    /// and sums the returned counts. Sample radii of adjacent points can
    /// overlap, so one incident may be counted several times; a route that
    /// repeatedly passes near the same hotspot is penalized for each pass.
    ///
    /// Queries run concurrently, bounded by
    /// [`ScoringConfig::max_concurrent_queries`]. If any query fails the
    /// whole route's scoring fails with that error; a partially-counted
    /// score is never returned.
    pub async fn score<S: IncidentStore>(
        &self,
        candidate: &RouteCandidate,
        queries: &IncidentQueries<'_, S>,
    ) -> Result<RouteScore, StoreError> {
        let sampled = sample_points(candidate.points(), self.config.target_sample_count);
        let sample_count = sampled.len();

        let incident_count = stream::iter(sampled)
            .map(|point| queries.query_nearby(point, self.config.sample_radius_km))
            .buffered(self.config.max_concurrent_queries.max(1))
            .try_fold(0u64, |total, hits| async move {
                Ok(total + hits.len() as u64)
            })
            .await?;

        let safety_score = score_from_count(incident_count, self.config.penalty_per_incident);

        debug!(
            samples = sample_count,
            incident_count, safety_score, "scored route"
        );

        Ok(RouteScore {
            incident_count,
            safety_score,
        })
    }
}
