//! Fixed-stride route sampling.

use crate::domain::Coordinate;

/// Thin a route geometry to roughly `target_count` representative points.
///
/// Takes every `step`-th point starting at index 0, where
/// `step = max(1, len / target_count)` (integer division), preserving
/// order. Deterministic: the same input always yields the same
/// subsequence, which keeps scoring reproducible.
///
/// Geometries shorter than `2 * target_count` are returned whole; the
/// stride only starts thinning beyond that. An empty input yields an
/// empty output and is the caller's degenerate-route signal.
pub fn sample_points(points: &[Coordinate], target_count: usize) -> Vec<Coordinate> {
    let step = (points.len() / target_count.max(1)).max(1);
    points.iter().step_by(step).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(len: usize) -> Vec<Coordinate> {
        (0..len)
            .map(|i| Coordinate::new(i as f64 * 1e-4, 0.0).unwrap())
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(sample_points(&[], 200).is_empty());
    }

    #[test]
    fn short_route_is_kept_whole() {
        let points = route(10);
        let sampled = sample_points(&points, 200);
        assert_eq!(sampled, points);
    }

    #[test]
    fn exact_multiple_thins_to_target() {
        let points = route(400);
        let sampled = sample_points(&points, 200);

        // step = 2: indices 0, 2, 4, ...
        assert_eq!(sampled.len(), 200);
        assert_eq!(sampled[0], points[0]);
        assert_eq!(sampled[1], points[2]);
        assert_eq!(sampled[199], points[398]);
    }

    #[test]
    fn dense_route_uses_larger_stride() {
        let points = route(1000);
        let sampled = sample_points(&points, 200);

        // step = 5: indices 0, 5, 10, ...
        assert_eq!(sampled.len(), 200);
        assert_eq!(sampled[1], points[5]);
    }

    #[test]
    fn always_starts_at_first_point() {
        for len in [1, 7, 199, 200, 201, 999] {
            let points = route(len);
            let sampled = sample_points(&points, 200);
            assert_eq!(sampled[0], points[0], "len {len}");
        }
    }

    #[test]
    fn zero_target_degrades_to_stride_one() {
        let points = route(5);
        assert_eq!(sample_points(&points, 0), points);
    }
}
