//! Geographic coordinate value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A validated WGS84 coordinate.
///
/// Latitude is within `[-90, 90]` and longitude within `[-180, 180]`, and
/// both are finite. Any `Coordinate` value is valid by construction.
///
/// # Examples
///
/// ```
/// use route_engine::domain::Coordinate;
///
/// let greenwich = Coordinate::new(51.4779, -0.0015).unwrap();
/// assert_eq!(greenwich.latitude(), 51.4779);
///
/// // Out-of-range latitude is rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated serde mirror of [`Coordinate`].
#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "lng")]
    longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate, validating both axes.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::InvalidCoordinate("must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinate(
                "latitude must be within [-90, 90]",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinate(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range pair constructs successfully.
        #[test]
        fn in_range_always_constructs(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assert!(Coordinate::new(lat, lng).is_ok());
        }

        /// Out-of-range latitude is always rejected.
        #[test]
        fn out_of_range_latitude_rejected(
            lat in prop_oneof![90.0001f64..1e6, -1e6f64..-90.0001],
            lng in -180.0f64..=180.0,
        ) {
            prop_assert!(Coordinate::new(lat, lng).is_err());
        }

        /// Accessors return exactly what was stored.
        #[test]
        fn accessors_roundtrip(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let c = Coordinate::new(lat, lng).unwrap();
            prop_assert_eq!(c.latitude(), lat);
            prop_assert_eq!(c.longitude(), lng);
        }
    }
}
