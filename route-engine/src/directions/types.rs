//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON responses. Only
//! the fields the engine reads are modelled.

use serde::Deserialize;

/// Top-level response from the directions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Request status: "OK", "ZERO_RESULTS", "NOT_FOUND",
    /// "OVER_QUERY_LIMIT", "REQUEST_DENIED", "INVALID_REQUEST",
    /// "UNKNOWN_ERROR".
    pub status: String,

    /// Alternative routes, provider-preferred first. Empty or absent when
    /// status is not "OK".
    #[serde(default)]
    pub routes: Vec<RouteDto>,

    /// Human-readable detail accompanying a non-OK status.
    pub error_message: Option<String>,
}

/// One alternative route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    /// Short description of the route (usually the main road name).
    pub summary: Option<String>,

    /// Route legs. With no waypoints there is exactly one leg.
    #[serde(default)]
    pub legs: Vec<LegDto>,

    /// Whole-route geometry as an encoded polyline.
    pub overview_polyline: PolylineDto,
}

/// One leg of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    /// Leg distance.
    pub distance: TextValue,

    /// Leg duration.
    pub duration: TextValue,
}

/// A value with its display text, e.g. `{ "text": "4.2 km", "value": 4213 }`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    /// Human-readable form.
    pub text: String,

    /// Numeric form (metres or seconds).
    pub value: i64,
}

/// Encoded polyline wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct PolylineDto {
    /// The encoded point sequence.
    pub points: String,
}
