//! Orchestration facade.
//!
//! Sequences the collaborators for one planning request: resolve both
//! addresses, fetch alternative routes, score them all and pick the
//! safest. This is the boundary an HTTP layer calls into; the facade
//! itself is stateless between calls.

use std::fmt;

use tracing::debug;

use crate::cache::CachedGeocodeClient;
use crate::directions::{DirectionsClient, DirectionsError};
use crate::domain::{Coordinate, DomainError, RouteCandidate, ScoringResult};
use crate::geocode::{GeocodeClient, GeocodeError};
use crate::incidents::{IncidentQueries, IncidentStore, StoreError};
use crate::scoring::{SafetyScorer, ScoringConfig, SelectError, select_best};

/// Which end of the journey an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Failure of the address-resolution collaborator.
#[derive(Debug, thiserror::Error)]
#[error("address resolver unavailable: {message}")]
pub struct ResolverError {
    pub message: String,
}

impl From<GeocodeError> for ResolverError {
    fn from(err: GeocodeError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Failure of the route-provider collaborator.
#[derive(Debug, thiserror::Error)]
#[error("route provider failed: {message}")]
pub struct ProviderError {
    pub message: String,
}

impl From<DirectionsError> for ProviderError {
    fn from(err: DirectionsError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Error from route planning.
///
/// The first three kinds are user-visible request outcomes; the rest are
/// transient collaborator failures surfaced unchanged. The engine never
/// downgrades a failure into a fabricated score, and never retries —
/// retry policy belongs to the collaborators' own clients.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The resolver found no match for one of the addresses
    #[error("no match for {which} address {text:?}")]
    AddressNotFound { which: Endpoint, text: String },

    /// The provider returned no usable route between the endpoints
    #[error("no driving route found between the given addresses")]
    RouteNotFound,

    /// The selector received an empty candidate list. Unreachable while
    /// the facade screens `RouteNotFound` first; kept as an invariant
    /// guard.
    #[error("no candidate routes to score")]
    NoCandidates,

    /// Address resolution failed
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// Route fetching failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// An incident store query failed or timed out
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The scored result violated a domain invariant
    #[error("invalid scoring result: {0}")]
    Internal(DomainError),
}

impl From<SelectError> for PlanError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::NoCandidates => PlanError::NoCandidates,
            SelectError::Store(e) => PlanError::Store(e),
            SelectError::InvalidResult(e) => PlanError::Internal(e),
        }
    }
}

/// Trait for resolving free-text addresses to coordinates.
///
/// This abstraction is the facade's seam to the geocoding collaborator;
/// tests substitute a fixture-backed resolver. "No match" is `Ok(None)`,
/// reserved errors mean the collaborator itself failed.
pub trait AddressResolver {
    /// Resolve an address to a coordinate, or `None` when nothing matches.
    fn resolve(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, ResolverError>> + Send;
}

/// Trait for fetching alternative route geometries.
///
/// Returns candidates in the provider's preference order. "No route" is
/// an empty list; errors mean the collaborator itself failed.
pub trait RouteProvider {
    /// Fetch alternative driving routes between two coordinates.
    fn get_alternatives(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> impl Future<Output = Result<Vec<RouteCandidate>, ProviderError>> + Send;
}

/// The route planning facade.
///
/// Generic over its three collaborators so production wires HTTP clients
/// and a pooled store while tests wire in-memory fakes. Holds no mutable
/// state; concurrent `plan_route` calls are independent, and dropping a
/// call's future cancels its in-flight collaborator requests without
/// affecting any other call.
pub struct RoutePlanner<R, P, S> {
    resolver: R,
    provider: P,
    store: S,
    config: ScoringConfig,
}

impl<R, P, S> RoutePlanner<R, P, S>
where
    R: AddressResolver,
    P: RouteProvider,
    S: IncidentStore,
{
    /// Create a planner with default scoring configuration.
    pub fn new(resolver: R, provider: P, store: S) -> Self {
        Self {
            resolver,
            provider,
            store,
            config: ScoringConfig::default(),
        }
    }

    /// Replace the scoring configuration.
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Plan the safest route between two free-text addresses.
    ///
    /// Resolves both addresses, fetches driving alternatives, scores every
    /// candidate against the incident store and returns all scored routes
    /// (in provider order) plus the index of the recommended one.
    pub async fn plan_route(
        &self,
        start_text: &str,
        end_text: &str,
    ) -> Result<ScoringResult, PlanError> {
        let start = self.resolve_endpoint(Endpoint::Start, start_text).await?;
        let end = self.resolve_endpoint(Endpoint::End, end_text).await?;

        let candidates = self.provider.get_alternatives(start, end).await?;
        if candidates.is_empty() {
            return Err(PlanError::RouteNotFound);
        }

        debug!(
            candidates = candidates.len(),
            %start,
            %end,
            "scoring route alternatives"
        );

        let scorer = SafetyScorer::new(&self.config);
        let queries = IncidentQueries::new(&self.store, self.config.store_timeout());

        let result = select_best(start, end, candidates, &scorer, &queries).await?;
        Ok(result)
    }

    async fn resolve_endpoint(
        &self,
        which: Endpoint,
        text: &str,
    ) -> Result<Coordinate, PlanError> {
        match self.resolver.resolve(text).await? {
            Some(coordinate) => Ok(coordinate),
            None => Err(PlanError::AddressNotFound {
                which,
                text: text.to_string(),
            }),
        }
    }
}

impl AddressResolver for GeocodeClient {
    async fn resolve(&self, text: &str) -> Result<Option<Coordinate>, ResolverError> {
        GeocodeClient::resolve(self, text).await.map_err(Into::into)
    }
}

impl AddressResolver for CachedGeocodeClient {
    async fn resolve(&self, text: &str) -> Result<Option<Coordinate>, ResolverError> {
        CachedGeocodeClient::resolve(self, text)
            .await
            .map_err(Into::into)
    }
}

impl RouteProvider for DirectionsClient {
    async fn get_alternatives(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<RouteCandidate>, ProviderError> {
        DirectionsClient::get_alternatives(self, origin, destination)
            .await
            .map_err(Into::into)
    }
}
