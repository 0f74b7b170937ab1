//! Geocoding client error types.

use crate::domain::DomainError;

/// Errors from the geocoding HTTP client.
///
/// "Address not found" is not an error; [`resolve`](super::GeocodeClient::resolve)
/// returns `Ok(None)` for that case.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// API returned an error status
    #[error("geocoding API error {status}: {message}")]
    Api { status: String, message: String },

    /// Rate limited by the API
    #[error("rate limited by geocoding API")]
    RateLimited,

    /// Request rejected (invalid or missing API key)
    #[error("geocoding request denied (check API key)")]
    Unauthorized,

    /// The API reported success but the location was not a valid coordinate
    #[error("invalid location in geocoding response: {0}")]
    InvalidLocation(#[from] DomainError),
}
