//! Geocoding HTTP client.
//!
//! Provides a single async operation: resolve a free-text address to a
//! coordinate. Handles authentication, concurrency limiting and conversion
//! to the domain type.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::types::GeocodeResponse;

/// Default base URL for the geocoding API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Geocoding API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl GeocodeClient {
    /// Create a new geocoding client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Resolve a free-text address to a coordinate.
    ///
    /// Returns `Ok(None)` when the API finds no match ("ZERO_RESULTS");
    /// every other non-OK status is an error. When the API returns several
    /// matches, the first (best) one wins.
    pub async fn resolve(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GeocodeError::Api {
                status: "CLOSED".to_string(),
                message: "Semaphore closed".to_string(),
            })?;

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16().to_string(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        match parsed.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(None),
            "OVER_QUERY_LIMIT" => return Err(GeocodeError::RateLimited),
            "REQUEST_DENIED" => return Err(GeocodeError::Unauthorized),
            other => {
                return Err(GeocodeError::Api {
                    status: other.to_string(),
                    message: parsed.error_message.unwrap_or_default(),
                });
            }
        }

        // Status "OK" with no results should not happen; treat it as no match.
        let Some(first) = parsed.results.first() else {
            return Ok(None);
        };

        let location = first.geometry.location;
        let coordinate = Coordinate::new(location.lat, location.lng)?;

        Ok(Some(coordinate))
    }
}
