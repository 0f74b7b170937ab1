//! Directions client (the Route Provider collaborator).
//!
//! Wraps the Google Directions API, requesting driving routes with
//! alternatives. Route geometry arrives as an encoded polyline and is
//! decoded into an ordered coordinate sequence before it reaches the
//! scoring core.

mod client;
mod convert;
mod error;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::{ConversionError, convert_routes, decode_polyline};
pub use error::DirectionsError;
pub use types::{DirectionsResponse, LegDto, PolylineDto, RouteDto, TextValue};
