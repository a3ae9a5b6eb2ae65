//! Piecewise cubic functions on a knot grid.

use crate::error::{SplineError, SplineResult};
use crate::hermite::{hermite_segments, HERMITE_MIN_POINTS};
use crate::interpolation::Interpolator;
use crate::polynomial::CubicSegment;
use crate::validation::check_strictly_increasing;

/// A piecewise cubic function.
///
/// Segment `i` is valid on `[knots[i], knots[i + 1]]` and is evaluated at
/// `t = x - knots[i]`. Queries outside the knot range are answered by the
/// nearest end segment's polynomial, so evaluation never fails.
///
/// # Example
///
/// ```rust
/// use akima_spline::interpolation::PiecewiseCubic;
///
/// // Hermite data for y = x^2 on [0, 2]
/// let pc = PiecewiseCubic::from_hermite(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], &[0.0, 2.0, 4.0])
///     .unwrap();
///
/// assert!((pc.evaluate(1.5) - 2.25).abs() < 1e-12);
/// assert!((pc.derivative(0.5) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseCubic {
    knots: Vec<f64>,
    segments: Vec<CubicSegment>,
}

impl PiecewiseCubic {
    /// Creates a piecewise cubic from knots and one segment per interval.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 knots, if the segment count
    /// is not one less than the knot count, or if the knots are not strictly
    /// increasing.
    pub fn new(knots: Vec<f64>, segments: Vec<CubicSegment>) -> SplineResult<Self> {
        if knots.len() < HERMITE_MIN_POINTS {
            return Err(SplineError::too_few_points(HERMITE_MIN_POINTS, knots.len()));
        }
        if segments.len() != knots.len() - 1 {
            return Err(SplineError::size_mismatch(knots.len() - 1, segments.len()));
        }
        check_strictly_increasing(&knots)?;

        Ok(Self { knots, segments })
    }

    /// Creates a piecewise cubic from knot values and first derivatives.
    pub fn from_hermite(xs: &[f64], ys: &[f64], derivatives: &[f64]) -> SplineResult<Self> {
        let segments = hermite_segments(xs, ys, derivatives)?;
        Self::new(xs.to_vec(), segments)
    }

    /// Returns the index of the segment used to evaluate `x`.
    ///
    /// An exact knot hit selects the segment starting there (the last knot
    /// maps to the last segment). Otherwise the segment to the left of the
    /// insertion point is used, clamped to the first and last segment.
    #[must_use]
    pub fn locate(&self, x: f64) -> usize {
        let last = self.segments.len() - 1;
        match self
            .knots
            .binary_search_by(|knot| knot.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(last),
            Err(i) => i.saturating_sub(1).min(last),
        }
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let i = self.locate(x);
        self.segments[i].value(x - self.knots[i])
    }

    /// Evaluates the first derivative at `x`.
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        let i = self.locate(x);
        self.segments[i].derivative(x - self.knots[i])
    }

    /// Evaluates the second derivative at `x`.
    ///
    /// Only piecewise continuous: at an interior knot the right-hand segment
    /// is used.
    #[must_use]
    pub fn second_derivative(&self, x: f64) -> f64 {
        let i = self.locate(x);
        self.segments[i].second_derivative(x - self.knots[i])
    }

    /// Returns the derivative as a piecewise polynomial on the same knots.
    #[must_use]
    pub fn derivative_spline(&self) -> Self {
        Self {
            knots: self.knots.clone(),
            segments: self
                .segments
                .iter()
                .map(CubicSegment::derivative_segment)
                .collect(),
        }
    }

    /// Returns the knots.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the segments in knot order.
    #[must_use]
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Returns the smallest knot.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.knots[0]
    }

    /// Returns the largest knot.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    /// Checks if x lies inside the knot range (inclusive).
    #[must_use]
    pub fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

impl Interpolator for PiecewiseCubic {
    fn interpolate(&self, x: f64) -> SplineResult<f64> {
        Ok(self.evaluate(x))
    }

    fn derivative(&self, x: f64) -> SplineResult<f64> {
        Ok(PiecewiseCubic::derivative(self, x))
    }

    fn allows_extrapolation(&self) -> bool {
        true
    }

    fn min_x(&self) -> f64 {
        PiecewiseCubic::min_x(self)
    }

    fn max_x(&self) -> f64 {
        PiecewiseCubic::max_x(self)
    }
}
