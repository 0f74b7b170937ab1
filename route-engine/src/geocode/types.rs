//! Geocoding API response DTOs.
//!
//! These types map directly to the Google Geocoding JSON responses. Only
//! the fields the engine reads are modelled; the API sends much more.

use serde::Deserialize;

/// Top-level response from the geocoding endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Request status: "OK", "ZERO_RESULTS", "OVER_QUERY_LIMIT",
    /// "REQUEST_DENIED", "INVALID_REQUEST", "UNKNOWN_ERROR".
    pub status: String,

    /// Matches, best first. Empty or absent when status is not "OK".
    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Human-readable detail accompanying a non-OK status.
    pub error_message: Option<String>,
}

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    /// Canonicalized address of the match.
    pub formatted_address: Option<String>,

    /// Geometry of the match.
    pub geometry: GeocodeGeometry,
}

/// Geometry block of a geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeGeometry {
    /// The match location.
    pub location: GeocodeLocation,
}

/// A raw wire coordinate, unvalidated.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeocodeLocation {
    pub lat: f64,
    pub lng: f64,
}
