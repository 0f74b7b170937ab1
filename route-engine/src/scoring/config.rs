//! Scoring configuration.

use std::time::Duration;

/// Tunable parameters for route scoring.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Target number of sampled points per route. Dense geometries are
    /// thinned towards this count to bound store load.
    pub target_sample_count: usize,

    /// Incident search radius around each sampled point, in kilometres.
    pub sample_radius_km: f64,

    /// Score penalty per incident hit. With the default of 3, around 34
    /// hits across a route saturate the score to zero.
    pub penalty_per_incident: u32,

    /// Maximum concurrent store queries per route.
    /// Higher values speed up scoring but load the store harder.
    pub max_concurrent_queries: usize,

    /// Time budget per store query, in seconds.
    pub store_timeout_secs: u64,
}

impl ScoringConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        target_sample_count: usize,
        sample_radius_km: f64,
        penalty_per_incident: u32,
        max_concurrent_queries: usize,
        store_timeout_secs: u64,
    ) -> Self {
        Self {
            target_sample_count,
            sample_radius_km,
            penalty_per_incident,
            max_concurrent_queries,
            store_timeout_secs,
        }
    }

    /// Returns the store query time budget as a Duration.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            target_sample_count: 200,
            sample_radius_km: 0.2,
            penalty_per_incident: 3,
            max_concurrent_queries: 8,
            store_timeout_secs: 10,
        }
    }
}
