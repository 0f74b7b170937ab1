//! Geocoding client (the Address Resolver collaborator).
//!
//! Wraps the Google Geocoding API: free-text address in, coordinate out.
//! "No match" is a normal outcome (`Ok(None)`), distinct from transport or
//! API failures.

mod client;
mod error;
mod types;

pub use client::{GeocodeClient, GeocodeConfig};
pub use error::GeocodeError;
pub use types::{GeocodeGeometry, GeocodeLocation, GeocodeResponse, GeocodeResult};
