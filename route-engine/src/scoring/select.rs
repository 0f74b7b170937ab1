//! Best-route selection.

use futures::future::try_join_all;
use tracing::debug;

use crate::domain::{Coordinate, DomainError, RouteCandidate, ScoredRoute, ScoringResult};
use crate::incidents::{IncidentQueries, IncidentStore, StoreError};

use super::score::SafetyScorer;

/// Error from best-route selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// The candidate list was empty. The facade screens for this before
    /// delegating, so hitting it means a caller skipped that screen.
    #[error("no candidate routes to score")]
    NoCandidates,

    /// Scoring a candidate failed; the whole selection fails with it.
    /// A partially-scored result is never reported as complete.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The assembled result violated a domain invariant.
    #[error("invalid scoring result: {0}")]
    InvalidResult(#[from] DomainError),
}

/// Score every candidate and pick the safest.
///
/// Candidates are scored concurrently but `scored_routes` in the result
/// preserves the provider's original order; completion order never leaks
/// into output order.
///
/// Tie-break: the strictly highest safety score wins, and on exact ties
/// the earliest candidate in provider order wins. This favors whichever
/// alternative the provider ranked first when safety is equal.
pub async fn select_best<S: IncidentStore>(
    start: Coordinate,
    end: Coordinate,
    candidates: Vec<RouteCandidate>,
    scorer: &SafetyScorer<'_>,
    queries: &IncidentQueries<'_, S>,
) -> Result<ScoringResult, SelectError> {
    if candidates.is_empty() {
        return Err(SelectError::NoCandidates);
    }

    let scores = try_join_all(
        candidates
            .iter()
            .map(|candidate| scorer.score(candidate, queries)),
    )
    .await?;

    let scored: Vec<ScoredRoute> = candidates
        .into_iter()
        .zip(scores)
        .map(|(candidate, score)| ScoredRoute {
            candidate,
            incident_count: score.incident_count,
            safety_score: score.safety_score,
        })
        .collect();

    // Stable scan: only a strictly greater score displaces the best.
    let mut best_index = 0;
    for (index, route) in scored.iter().enumerate().skip(1) {
        if route.safety_score > scored[best_index].safety_score {
            best_index = index;
        }
    }

    debug!(
        candidates = scored.len(),
        best_index,
        best_score = scored[best_index].safety_score,
        "selected best route"
    );

    Ok(ScoringResult::new(start, end, scored, best_index)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IncidentRecord;
    use crate::incidents::{BoundingBox, InMemoryIncidentStore};
    use crate::scoring::ScoringConfig;
    use chrono::Utc;
    use std::time::Duration;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn incident(id: i64, lat: f64, lng: f64) -> IncidentRecord {
        IncidentRecord {
            id,
            location: coord(lat, lng),
            category: "theft".to_string(),
            severity: 3,
            description: None,
            occurred_at: Utc::now(),
        }
    }

    /// A 10-point route pinned to one location, so incident exposure is
    /// controlled entirely by what sits at that location.
    fn route_at(lat: f64, lng: f64) -> RouteCandidate {
        RouteCandidate::new(vec![coord(lat, lng); 10], "1 km", "5 mins").unwrap()
    }

    async fn run(
        candidates: Vec<RouteCandidate>,
        store: &InMemoryIncidentStore,
    ) -> Result<ScoringResult, SelectError> {
        let config = ScoringConfig::default();
        let scorer = SafetyScorer::new(&config);
        let queries = IncidentQueries::new(store, config.store_timeout());
        select_best(coord(51.0, 0.0), coord(52.0, 0.0), candidates, &scorer, &queries).await
    }

    #[tokio::test]
    async fn empty_candidates_fail_with_no_candidates() {
        let store = InMemoryIncidentStore::new(vec![]);
        let result = run(vec![], &store).await;

        assert!(matches!(result, Err(SelectError::NoCandidates)));
    }

    #[tokio::test]
    async fn safe_route_beats_risky_route() {
        // Route A sees no incidents; route B sees 5 at every sample:
        // A scores 100, B scores max(0, 100 - 50 * 3) = 0.
        let store = InMemoryIncidentStore::new(
            (1..=5).map(|id| incident(id, 20.0001, 20.0001)).collect(),
        );

        let result = run(vec![route_at(10.0, 10.0), route_at(20.0, 20.0)], &store)
            .await
            .unwrap();

        assert_eq!(result.scored_routes()[0].safety_score, 100);
        assert_eq!(result.scored_routes()[1].safety_score, 0);
        assert_eq!(result.scored_routes()[1].incident_count, 50);
        assert_eq!(result.best_index(), 0);
    }

    #[tokio::test]
    async fn later_better_route_wins() {
        let store = InMemoryIncidentStore::new(vec![incident(1, 10.0001, 10.0001)]);

        let result = run(vec![route_at(10.0, 10.0), route_at(20.0, 20.0)], &store)
            .await
            .unwrap();

        assert_eq!(result.best_index(), 1);
    }

    #[tokio::test]
    async fn tie_goes_to_first_in_provider_order() {
        // No incidents anywhere: every route scores 100.
        let store = InMemoryIncidentStore::new(vec![]);

        let result = run(
            vec![
                route_at(10.0, 10.0),
                route_at(20.0, 20.0),
                route_at(30.0, 30.0),
            ],
            &store,
        )
        .await
        .unwrap();

        assert_eq!(result.best_index(), 0);
    }

    #[tokio::test]
    async fn tie_between_later_equals_goes_to_earlier() {
        // Route 0 is risky; routes 1 and 2 both score 100: index 1 wins.
        let store = InMemoryIncidentStore::new(vec![incident(1, 10.0001, 10.0001)]);

        let result = run(
            vec![
                route_at(10.0, 10.0),
                route_at(20.0, 20.0),
                route_at(30.0, 30.0),
            ],
            &store,
        )
        .await
        .unwrap();

        assert_eq!(result.best_index(), 1);
    }

    #[tokio::test]
    async fn output_preserves_provider_order_despite_completion_order() {
        // The first route's store queries are slower than the second's,
        // so the second candidate finishes scoring first.
        struct SkewedStore;

        impl IncidentStore for SkewedStore {
            async fn query_bbox(
                &self,
                bbox: BoundingBox,
            ) -> Result<Vec<IncidentRecord>, StoreError> {
                if bbox.lat_min < 15.0 {
                    tokio::time::sleep(Duration::from_millis(30)).await;
                    Ok(vec![incident(1, 10.0001, 10.0001)])
                } else {
                    Ok(Vec::new())
                }
            }
        }

        let config = ScoringConfig::default();
        let scorer = SafetyScorer::new(&config);
        let store = SkewedStore;
        let queries = IncidentQueries::new(&store, config.store_timeout());

        let result = select_best(
            coord(51.0, 0.0),
            coord(52.0, 0.0),
            vec![route_at(10.0, 10.0), route_at(20.0, 20.0)],
            &scorer,
            &queries,
        )
        .await
        .unwrap();

        // Slow risky route is still first in the output.
        assert_eq!(result.scored_routes()[0].incident_count, 10);
        assert_eq!(result.scored_routes()[1].incident_count, 0);
        assert_eq!(result.best_index(), 1);
    }

    #[tokio::test]
    async fn any_scoring_failure_fails_the_selection() {
        struct HalfBrokenStore;

        impl IncidentStore for HalfBrokenStore {
            async fn query_bbox(
                &self,
                bbox: BoundingBox,
            ) -> Result<Vec<IncidentRecord>, StoreError> {
                if bbox.lat_min > 15.0 {
                    Err(StoreError::Unavailable("shard down".to_string()))
                } else {
                    Ok(Vec::new())
                }
            }
        }

        let config = ScoringConfig::default();
        let scorer = SafetyScorer::new(&config);
        let store = HalfBrokenStore;
        let queries = IncidentQueries::new(&store, config.store_timeout());

        let result = select_best(
            coord(51.0, 0.0),
            coord(52.0, 0.0),
            vec![route_at(10.0, 10.0), route_at(20.0, 20.0)],
            &scorer,
            &queries,
        )
        .await;

        assert!(matches!(
            result,
            Err(SelectError::Store(StoreError::Unavailable(_)))
        ));
    }
}
