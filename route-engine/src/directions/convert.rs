//! Conversion from directions DTOs to domain types.
//!
//! This module handles the transformation of raw directions responses into
//! validated [`RouteCandidate`]s, including decoding the encoded-polyline
//! wire format into an ordered coordinate sequence.

use tracing::warn;

use crate::domain::{Coordinate, DomainError, RouteCandidate};

use super::types::RouteDto;

/// Encoded polylines store coordinates scaled by 1e5.
const POLYLINE_PRECISION: f64 = 1e-5;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Polyline contains a byte outside the encoding alphabet
    #[error("invalid polyline character at byte {0}")]
    InvalidPolylineChar(usize),

    /// Polyline ends in the middle of a value
    #[error("truncated polyline")]
    TruncatedPolyline,

    /// Decoded geometry is empty or contains an invalid coordinate
    #[error("invalid route geometry: {0}")]
    InvalidGeometry(#[from] DomainError),

    /// Route has no legs to take distance/duration from
    #[error("route has no legs")]
    MissingLeg,
}

/// Decode a Google encoded polyline into an ordered coordinate sequence.
///
/// Each point is a pair of zigzag-encoded, base64-ish varints holding the
/// delta from the previous point, scaled by 1e5.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinate>, ConversionError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut pos = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while pos < bytes.len() {
        lat += decode_value(bytes, &mut pos)?;
        lng += decode_value(bytes, &mut pos)?;

        let point = Coordinate::new(
            lat as f64 * POLYLINE_PRECISION,
            lng as f64 * POLYLINE_PRECISION,
        )?;
        points.push(point);
    }

    Ok(points)
}

/// Decode one zigzag varint starting at `pos`, advancing it past the value.
fn decode_value(bytes: &[u8], pos: &mut usize) -> Result<i64, ConversionError> {
    let mut result: i64 = 0;
    let mut shift = 0u32;

    loop {
        let byte = *bytes.get(*pos).ok_or(ConversionError::TruncatedPolyline)?;
        if !(63..=126).contains(&byte) {
            return Err(ConversionError::InvalidPolylineChar(*pos));
        }
        *pos += 1;

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
        // 7 chunks of 5 bits exceed any real coordinate delta
        if shift > 35 {
            return Err(ConversionError::TruncatedPolyline);
        }
    }

    // Undo zigzag encoding
    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Convert one route DTO into a candidate.
pub fn convert_route(route: &RouteDto) -> Result<RouteCandidate, ConversionError> {
    let leg = route.legs.first().ok_or(ConversionError::MissingLeg)?;
    let points = decode_polyline(&route.overview_polyline.points)?;

    let candidate = RouteCandidate::new(points, &leg.distance.text, &leg.duration.text)?;
    Ok(candidate)
}

/// Convert a directions response's routes into candidates.
///
/// A malformed route is skipped with a warning rather than failing the
/// whole response; provider order is preserved for the survivors.
pub fn convert_routes(routes: &[RouteDto]) -> Vec<RouteCandidate> {
    let mut candidates = Vec::with_capacity(routes.len());

    for (index, route) in routes.iter().enumerate() {
        match convert_route(route) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => {
                warn!(
                    index,
                    summary = route.summary.as_deref().unwrap_or(""),
                    error = %e,
                    "skipping malformed route"
                );
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::types::{LegDto, PolylineDto, TextValue};

    fn leg(distance: &str, duration: &str) -> LegDto {
        LegDto {
            distance: TextValue {
                text: distance.to_string(),
                value: 0,
            },
            duration: TextValue {
                text: duration.to_string(),
                value: 0,
            },
        }
    }

    fn route(polyline: &str, legs: Vec<LegDto>) -> RouteDto {
        RouteDto {
            summary: Some("test".to_string()),
            legs,
            overview_polyline: PolylineDto {
                points: polyline.to_string(),
            },
        }
    }

    fn assert_close(point: Coordinate, lat: f64, lng: f64) {
        assert!(
            (point.latitude() - lat).abs() < 1e-6,
            "latitude {} != {lat}",
            point.latitude()
        );
        assert!(
            (point.longitude() - lng).abs() < 1e-6,
            "longitude {} != {lng}",
            point.longitude()
        );
    }

    #[test]
    fn decodes_documented_example() {
        // The worked example from the encoded-polyline format docs.
        let points = decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();

        assert_eq!(points.len(), 3);
        assert_close(points[0], 38.5, -120.2);
        assert_close(points[1], 40.7, -120.95);
        assert_close(points[2], 43.252, -126.453);
    }

    #[test]
    fn decodes_origin_point() {
        // '?' encodes a zero delta
        let points = decode_polyline("??").unwrap();
        assert_eq!(points.len(), 1);
        assert_close(points[0], 0.0, 0.0);
    }

    #[test]
    fn empty_polyline_decodes_to_no_points() {
        assert!(decode_polyline("").unwrap().is_empty());
    }

    #[test]
    fn rejects_truncated_polyline() {
        // Single char leaves the longitude value missing
        assert_eq!(
            decode_polyline("?").unwrap_err(),
            ConversionError::TruncatedPolyline
        );
    }

    #[test]
    fn rejects_out_of_alphabet_byte() {
        let err = decode_polyline("_p~iF\n~ps|U").unwrap_err();
        assert_eq!(err, ConversionError::InvalidPolylineChar(5));
    }

    #[test]
    fn convert_route_builds_candidate() {
        let dto = route("_p~iF~ps|U", vec![leg("250 km", "3 hours")]);
        let candidate = convert_route(&dto).unwrap();

        assert_eq!(candidate.points().len(), 1);
        assert_eq!(candidate.distance_label(), "250 km");
        assert_eq!(candidate.duration_label(), "3 hours");
    }

    #[test]
    fn convert_route_rejects_missing_leg() {
        let dto = route("_p~iF~ps|U", vec![]);
        assert_eq!(convert_route(&dto).unwrap_err(), ConversionError::MissingLeg);
    }

    #[test]
    fn convert_route_rejects_empty_geometry() {
        let dto = route("", vec![leg("0 km", "0 mins")]);
        assert!(matches!(
            convert_route(&dto).unwrap_err(),
            ConversionError::InvalidGeometry(DomainError::EmptyGeometry)
        ));
    }

    #[test]
    fn convert_routes_skips_malformed_and_keeps_order() {
        let routes = vec![
            route("_p~iF~ps|U", vec![leg("1 km", "2 mins")]),
            route("", vec![leg("broken", "broken")]),
            route("??", vec![leg("3 km", "4 mins")]),
        ];

        let candidates = convert_routes(&routes);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].distance_label(), "1 km");
        assert_eq!(candidates[1].distance_label(), "3 km");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Encode a single value the way the wire format does, for roundtrips.
    fn encode_value(value: i64, out: &mut String) {
        let mut v = if value < 0 { !(value << 1) } else { value << 1 };
        while v >= 0x20 {
            out.push((((0x20 | (v & 0x1f)) + 63) as u8) as char);
            v >>= 5;
        }
        out.push(((v + 63) as u8) as char);
    }

    fn encode_polyline(points: &[(f64, f64)]) -> String {
        let mut out = String::new();
        let mut prev = (0i64, 0i64);
        for &(lat, lng) in points {
            let scaled = ((lat * 1e5).round() as i64, (lng * 1e5).round() as i64);
            encode_value(scaled.0 - prev.0, &mut out);
            encode_value(scaled.1 - prev.1, &mut out);
            prev = scaled;
        }
        out
    }

    proptest! {
        /// Decoding an encoded point sequence recovers it to wire precision.
        #[test]
        fn roundtrip(points in prop::collection::vec(
            (-89.0f64..89.0, -179.0f64..179.0),
            0..20,
        )) {
            let encoded = encode_polyline(&points);
            let decoded = decode_polyline(&encoded).unwrap();

            prop_assert_eq!(decoded.len(), points.len());
            for (decoded, &(lat, lng)) in decoded.iter().zip(&points) {
                prop_assert!((decoded.latitude() - lat).abs() < 1e-5 + 1e-9);
                prop_assert!((decoded.longitude() - lng).abs() < 1e-5 + 1e-9);
            }
        }
    }
}
