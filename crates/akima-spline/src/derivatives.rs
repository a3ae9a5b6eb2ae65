//! First-derivative estimation at the knots.
//!
//! Interior knots use Akima's weighted average of the neighbouring secant
//! slopes; the weights are the absolute changes in slope one step further out,
//! so a knot next to an abrupt change in trend leans on the smoother side.
//! The two knots at each end of the domain have no full stencil and instead
//! take the slope of the quadratic through the three outermost points.
//!
//! # Flat regions
//!
//! When both weights are below the tolerance the weighted formula degenerates
//! to `0/0`. Those knots fall back to a distance-weighted blend of the two
//! adjacent secants. The default tolerance is `f64::EPSILON`, compared
//! without scaling.
//!
//! # Range
//!
//! Slopes are finite for finite input only while the secants, the weights
//! and the three-point numerators stay within `f64` range. Values near
//! `f64::MAX` can overflow a weight to infinity, and `inf / inf` then yields
//! NaN slopes; the inputs are not rescaled.

use log::trace;

use crate::error::SplineResult;
use crate::validation::validate_inputs;

/// Minimum number of knots for the Akima estimator.
pub const AKIMA_MIN_POINTS: usize = 5;

/// Default threshold below which both Akima weights count as zero.
pub const DEFAULT_FLAT_TOLERANCE: f64 = f64::EPSILON;

/// Slope at `x` of the quadratic through three samples.
///
/// The samples must have distinct abscissae; `x` need not coincide with any
/// of them.
///
/// # Example
///
/// ```rust
/// use akima_spline::derivatives::three_point_derivative;
///
/// // y = x^2 through (0, 0), (1, 1), (3, 9); slope at x = 2 is 4
/// let d = three_point_derivative([0.0, 1.0, 3.0], [0.0, 1.0, 9.0], 2.0);
/// assert!((d - 4.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn three_point_derivative(xs: [f64; 3], ys: [f64; 3], x: f64) -> f64 {
    let [y0, y1, y2] = ys;

    let t = x - xs[0];
    let t1 = xs[1] - xs[0];
    let t2 = xs[2] - xs[0];

    // y = y0 + b*t + a*t^2 through (t1, y1) and (t2, y2)
    let a = (y2 - y0 - (t2 / t1 * (y1 - y0))) / (t2 * t2 - t2 * t1);
    let b = (y1 - y0 - a * t1 * t1) / t1;

    (2.0 * a * t) + b
}

/// Estimates the first derivative at every knot using Akima's rule.
///
/// Validates the input first: equal lengths, at least [`AKIMA_MIN_POINTS`]
/// points and strictly increasing knots.
///
/// # Arguments
///
/// * `xs` - Knots (strictly increasing)
/// * `ys` - Values at the knots
/// * `flat_tolerance` - Threshold for the flat-region fallback
pub fn akima_derivatives(xs: &[f64], ys: &[f64], flat_tolerance: f64) -> SplineResult<Vec<f64>> {
    validate_inputs(xs, ys, AKIMA_MIN_POINTS)?;
    Ok(estimate(xs, ys, flat_tolerance).derivatives)
}

/// Derivatives together with how many interior knots took the fallback.
#[derive(Debug, Clone)]
pub(crate) struct Estimate {
    pub(crate) derivatives: Vec<f64>,
    pub(crate) flat_knots: usize,
}

/// Runs the estimator on input that has already been validated.
pub(crate) fn estimate(xs: &[f64], ys: &[f64], flat_tolerance: f64) -> Estimate {
    let n = xs.len();
    debug_assert!(n >= AKIMA_MIN_POINTS && ys.len() == n);

    let diffs = secant_slopes(xs, ys);

    // weights[0] is never read
    let mut weights = vec![0.0; n - 1];
    for i in 1..n - 1 {
        weights[i] = (diffs[i] - diffs[i - 1]).abs();
    }

    let mut derivatives = vec![0.0; n];
    let mut flat_knots = 0;

    for i in 2..n - 2 {
        let w_plus = weights[i + 1];
        let w_minus = weights[i - 1];

        if w_plus.abs() < flat_tolerance && w_minus.abs() < flat_tolerance {
            let left = xs[i] - xs[i - 1];
            let right = xs[i + 1] - xs[i];
            derivatives[i] = (right * diffs[i - 1] + left * diffs[i]) / (xs[i + 1] - xs[i - 1]);
            flat_knots += 1;
            trace!("knot {} (x = {}) is in a flat region", i, xs[i]);
        } else {
            derivatives[i] = (w_plus * diffs[i - 1] + w_minus * diffs[i]) / (w_plus + w_minus);
        }
    }

    let head_x = [xs[0], xs[1], xs[2]];
    let head_y = [ys[0], ys[1], ys[2]];
    derivatives[0] = three_point_derivative(head_x, head_y, xs[0]);
    derivatives[1] = three_point_derivative(head_x, head_y, xs[1]);

    let tail_x = [xs[n - 3], xs[n - 2], xs[n - 1]];
    let tail_y = [ys[n - 3], ys[n - 2], ys[n - 1]];
    derivatives[n - 2] = three_point_derivative(tail_x, tail_y, xs[n - 2]);
    derivatives[n - 1] = three_point_derivative(tail_x, tail_y, xs[n - 1]);

    Estimate {
        derivatives,
        flat_knots,
    }
}

/// Secant slope of every interval.
fn secant_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
        .collect()
}
