//! Directions client error types.

/// Errors from the directions HTTP client.
///
/// "No route between these points" is not an error;
/// [`get_alternatives`](super::DirectionsClient::get_alternatives) returns
/// an empty list for that case.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// API returned an error status
    #[error("directions API error {status}: {message}")]
    Api { status: String, message: String },

    /// Rate limited by the API
    #[error("rate limited by directions API")]
    RateLimited,

    /// Request rejected (invalid or missing API key)
    #[error("directions request denied (check API key)")]
    Unauthorized,
}
