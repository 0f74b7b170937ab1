//! Caching layer for geocoding lookups.
//!
//! Users plan routes between the same handful of addresses again and
//! again, and geocoding results change rarely, so lookups are cached by
//! normalized address text. Only successful lookups are cached — both
//! "found" and "no match" — never errors.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Coordinate;
use crate::geocode::{GeocodeClient, GeocodeError};

/// Configuration for the geocoding cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Normalize an address into a cache key.
///
/// Trims, lowercases and collapses internal whitespace so trivially
/// different spellings of the same address share an entry.
fn cache_key(address: &str) -> String {
    address
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Geocoding client with caching.
///
/// Wraps a [`GeocodeClient`] and caches resolution outcomes, including
/// not-found, since re-asking the API about an unknown address is as
/// wasteful as re-asking about a known one.
pub struct CachedGeocodeClient {
    client: GeocodeClient,
    cache: MokaCache<String, Option<Coordinate>>,
}

impl CachedGeocodeClient {
    /// Create a new cached client.
    pub fn new(client: GeocodeClient, config: &GeocodeCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Resolve an address, using the cache if possible.
    pub async fn resolve(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let key = cache_key(address);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let resolved = self.client.resolve(address).await?;
        self.cache.insert(key, resolved).await;

        Ok(resolved)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &GeocodeClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
