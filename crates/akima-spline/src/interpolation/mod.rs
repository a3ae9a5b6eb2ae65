//! Spline interpolators.
//!
//! - [`AkimaSpline`]: Akima cubic spline (locally determined slopes, C1)
//! - [`PiecewiseCubic`]: Generic piecewise cubic built from Hermite data or
//!   explicit segments
//!
//! # Extrapolation
//!
//! Both types continue the nearest end segment's cubic outside the knot
//! range. The continuation is well defined but carries no shape guarantees;
//! use [`Interpolator::in_range`] to detect such queries.

mod akima;
mod piecewise;

pub use akima::{fit, AkimaConfig, AkimaInterpolator, AkimaSpline, AkimaSplineBuilder};
pub use piecewise::PiecewiseCubic;

use crate::error::SplineResult;

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface over the fitted function.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> SplineResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> SplineResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivatives::{akima_derivatives, DEFAULT_FLAT_TOLERANCE};
    use approx::assert_relative_eq;

    #[test]
    fn test_akima_equals_hermite_assembly() {
        // Fitting is exactly the estimator followed by the converter
        let xs = vec![0.5, 1.0, 2.0, 3.0, 5.0, 7.0];
        let ys = vec![0.02, 0.025, 0.03, 0.028, 0.035, 0.04];

        let spline = AkimaSpline::new(&xs, &ys).unwrap();
        let ds = akima_derivatives(&xs, &ys, DEFAULT_FLAT_TOLERANCE).unwrap();
        let manual = PiecewiseCubic::from_hermite(&xs, &ys, &ds).unwrap();

        assert_eq!(spline.as_piecewise(), &manual);
        assert_eq!(spline.into_piecewise(), manual);
    }

    #[test]
    fn test_derivative_consistency() {
        let xs = vec![0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0];
        let ys = vec![0.02, 0.025, 0.03, 0.028, 0.035, 0.037, 0.04];

        let spline = AkimaSpline::new(&xs, &ys).unwrap();
        check_derivative(&spline, 1.5, "AkimaSpline");
        check_derivative(&spline, 6.0, "AkimaSpline");

        let pc = spline.clone().into_piecewise();
        check_derivative(&pc, 4.2, "PiecewiseCubic");
    }

    fn check_derivative(interp: &dyn Interpolator, t: f64, name: &str) {
        let h = 1e-6;
        let y_plus = interp.interpolate(t + h).unwrap();
        let y_minus = interp.interpolate(t - h).unwrap();
        let numerical = (y_plus - y_minus) / (2.0 * h);

        let analytical = interp.derivative(t).unwrap();

        assert!(
            (analytical - numerical).abs() < 1e-6,
            "{} derivative at t={}: analytical={}, numerical={}",
            name,
            t,
            analytical,
            numerical
        );
    }

    #[test]
    fn test_outlier_does_not_ring() {
        // A single spike on otherwise flat data: the spline stays flat two
        // segments away from it
        let xs: Vec<f64> = (0..11).map(f64::from).collect();
        let mut ys = vec![1.0; 11];
        ys[5] = 6.0;

        let spline = AkimaSpline::new(&xs, &ys).unwrap();

        for x in [0.5, 1.5, 2.5, 7.5, 8.5, 9.5] {
            assert_relative_eq!(spline.evaluate(x), 1.0, epsilon = 1e-12);
        }
        assert!(spline.evaluate(4.5) > 1.0);
    }

    #[test]
    fn test_in_range() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [1.0, 0.0, 1.0, 0.0, 1.0];
        let spline = AkimaSpline::new(&xs, &ys).unwrap();

        assert!(spline.in_range(1.0));
        assert!(spline.in_range(5.0));
        assert!(!spline.in_range(0.999));
        assert!(!spline.in_range(5.001));
        assert!(spline.interpolate(5.001).is_ok());
    }
}
