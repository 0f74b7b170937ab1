//! Route safety scoring engine.
//!
//! Given two free-text addresses, the engine asks a geocoder for their
//! coordinates, a directions provider for alternative driving routes, and a
//! historical-incident store for incidents near each route, then scores
//! every candidate and recommends the safest one.
//!
//! The engine is a library with no wire surface of its own; an HTTP layer
//! calls [`plan::RoutePlanner::plan_route`] and serializes the result.

pub mod cache;
pub mod directions;
pub mod domain;
pub mod geocode;
pub mod incidents;
pub mod plan;
pub mod scoring;
