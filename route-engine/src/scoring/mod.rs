//! Route safety scoring.
//!
//! The algorithmic core of the engine: sample each candidate geometry,
//! count historical incidents near the sampled points, convert the count
//! into a 0-100 safety score, and pick the best candidate.

mod config;
mod sample;
mod score;
mod select;

pub use config::ScoringConfig;
pub use sample::sample_points;
pub use score::{RouteScore, SafetyScorer, score_from_count};
pub use select::{SelectError, select_best};
