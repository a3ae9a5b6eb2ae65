//! Conversion from Hermite data to polynomial segments.
//!
//! Each segment is determined by the values and slopes at its two knots, so
//! no global system is solved and the resulting spline is C1 by construction.
//! This step knows nothing about how the slopes were obtained.

use crate::error::{SplineError, SplineResult};
use crate::polynomial::CubicSegment;

/// Minimum number of knots for a Hermite spline (a single segment).
pub const HERMITE_MIN_POINTS: usize = 2;

/// Builds one cubic segment per interval from knot values and slopes.
///
/// Segment `i` is expressed in powers of `t = x - xs[i]`.
///
/// # Arguments
///
/// * `xs` - Knots
/// * `ys` - Values at the knots
/// * `derivatives` - First derivatives at the knots
///
/// # Errors
///
/// Returns `SizeMismatch` if the three sequences differ in length and
/// `TooFewPoints` if there are fewer than [`HERMITE_MIN_POINTS`] knots.
///
/// # Example
///
/// ```rust
/// use akima_spline::hermite::hermite_segments;
///
/// let segments = hermite_segments(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 0.0]).unwrap();
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].coefficients(), [0.0, 0.0, 3.0, -2.0]);
/// ```
pub fn hermite_segments(
    xs: &[f64],
    ys: &[f64],
    derivatives: &[f64],
) -> SplineResult<Vec<CubicSegment>> {
    let n = xs.len();
    if ys.len() != n {
        return Err(SplineError::size_mismatch(n, ys.len()));
    }
    if derivatives.len() != n {
        return Err(SplineError::size_mismatch(n, derivatives.len()));
    }
    if n < HERMITE_MIN_POINTS {
        return Err(SplineError::too_few_points(HERMITE_MIN_POINTS, n));
    }

    let segments = (0..n - 1)
        .map(|i| {
            CubicSegment::from_hermite(
                ys[i],
                ys[i + 1],
                derivatives[i],
                derivatives[i + 1],
                xs[i + 1] - xs[i],
            )
        })
        .collect();

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segments_match_knot_data() {
        let xs = [0.0, 0.5, 2.0, 2.5, 6.0];
        let ys = [1.0, -1.0, 4.0, 3.5, 0.0];
        let ds = [0.0, 2.0, -1.0, 0.25, 3.0];

        let segments = hermite_segments(&xs, &ys, &ds).unwrap();
        assert_eq!(segments.len(), xs.len() - 1);

        for (i, seg) in segments.iter().enumerate() {
            let w = xs[i + 1] - xs[i];
            assert_eq!(seg.value(0.0), ys[i]);
            assert_eq!(seg.derivative(0.0), ds[i]);
            assert_relative_eq!(seg.value(w), ys[i + 1], epsilon = 1e-10);
            assert_relative_eq!(seg.derivative(w), ds[i + 1], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cubic_is_reproduced() {
        // Exact slopes of a cubic give back that cubic on every segment
        let f = |x: f64| x * x * x - 2.0 * x + 1.0;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let xs = [-1.0, 0.0, 1.5, 3.0];
        let ys = xs.map(f);
        let ds = xs.map(df);

        let segments = hermite_segments(&xs, &ys, &ds).unwrap();
        for (i, seg) in segments.iter().enumerate() {
            let mid = 0.5 * (xs[i] + xs[i + 1]);
            assert_relative_eq!(seg.value(mid - xs[i]), f(mid), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_size_guards() {
        assert_eq!(
            hermite_segments(&[0.0, 1.0], &[0.0], &[0.0, 0.0]).unwrap_err(),
            SplineError::size_mismatch(2, 1)
        );
        assert_eq!(
            hermite_segments(&[0.0, 1.0, 2.0], &[0.0; 3], &[0.0; 2]).unwrap_err(),
            SplineError::size_mismatch(3, 2)
        );
        assert_eq!(
            hermite_segments(&[0.0], &[0.0], &[0.0]).unwrap_err(),
            SplineError::too_few_points(2, 1)
        );
    }
}
