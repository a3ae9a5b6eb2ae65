//! Akima spline interpolation.
//!
//! Reference: Akima, H. (1970) "A New Method of Interpolation and Smooth
//! Curve Fitting Based on Local Procedures", J. ACM 17(4).

use log::debug;

use crate::derivatives::{self, AKIMA_MIN_POINTS, DEFAULT_FLAT_TOLERANCE};
use crate::error::{SplineError, SplineResult};
use crate::hermite::hermite_segments;
use crate::interpolation::{Interpolator, PiecewiseCubic};
use crate::polynomial::CubicSegment;
use crate::validation::{validate_inputs, validate_optional};

/// Configuration for fitting an Akima spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AkimaConfig {
    /// Threshold below which both Akima weights at a knot count as zero.
    pub flat_tolerance: f64,
}

impl Default for AkimaConfig {
    fn default() -> Self {
        Self {
            flat_tolerance: DEFAULT_FLAT_TOLERANCE,
        }
    }
}

impl AkimaConfig {
    /// Creates a new configuration.
    #[must_use]
    pub fn new(flat_tolerance: f64) -> Self {
        Self { flat_tolerance }
    }

    /// Sets the flat-region tolerance.
    #[must_use]
    pub fn with_flat_tolerance(mut self, flat_tolerance: f64) -> Self {
        self.flat_tolerance = flat_tolerance;
        self
    }
}

/// Fits Akima splines with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AkimaInterpolator {
    config: AkimaConfig,
}

impl AkimaInterpolator {
    /// Creates an interpolator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpolator with the given configuration.
    #[must_use]
    pub fn with_config(config: AkimaConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AkimaConfig {
        &self.config
    }

    /// Fits a spline through `(xs[i], ys[i])`.
    ///
    /// The inputs are copied; later changes to them do not affect the
    /// returned spline.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ, there are fewer than 5 points,
    /// or the knots are not strictly increasing.
    pub fn fit(&self, xs: &[f64], ys: &[f64]) -> SplineResult<AkimaSpline> {
        validate_inputs(xs, ys, AKIMA_MIN_POINTS)?;

        let estimate = derivatives::estimate(xs, ys, self.config.flat_tolerance);
        let segments = hermite_segments(xs, ys, &estimate.derivatives)?;

        // Input has been validated, so assembly can only fail on a defect
        let curve = PiecewiseCubic::new(xs.to_vec(), segments)
            .map_err(|e| SplineError::internal(format!("segment table rejected: {e}")))?;

        debug!(
            "fitted Akima spline on {} knots ({} flat-region knots)",
            xs.len(),
            estimate.flat_knots
        );

        Ok(AkimaSpline { curve })
    }
}

/// Fits an Akima spline with the default configuration.
///
/// Shorthand for [`AkimaSpline::new`].
pub fn fit(xs: &[f64], ys: &[f64]) -> SplineResult<AkimaSpline> {
    AkimaInterpolator::new().fit(xs, ys)
}

/// Akima cubic spline.
///
/// A C1 piecewise cubic through every data point whose slopes are estimated
/// locally, so an outlier only disturbs the segments next to it. Requires at
/// least 5 points.
///
/// Outside the knot range the first or last segment's cubic is continued;
/// [`evaluate`](Self::evaluate) never fails. Callers that need a domain error
/// must check [`in_range`](Interpolator::in_range) themselves.
///
/// # Example
///
/// ```rust
/// use akima_spline::interpolation::AkimaSpline;
///
/// let xs = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
/// let ys = [40.0, 10.0, 17.0, 39.0, 99.0, 120.0, 30.0, 10.0];
///
/// let spline = AkimaSpline::new(&xs, &ys).unwrap();
/// assert_eq!(spline.evaluate(10.0), 40.0);
/// assert!(spline.evaluate(45.0).is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AkimaSpline {
    curve: PiecewiseCubic,
}

impl AkimaSpline {
    /// Fits a spline with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `xs` - Knots (strictly increasing, at least 5)
    /// * `ys` - Values at the knots
    pub fn new(xs: &[f64], ys: &[f64]) -> SplineResult<Self> {
        fit(xs, ys)
    }

    /// Returns a builder for sequences that may be absent.
    #[must_use]
    pub fn builder() -> AkimaSplineBuilder {
        AkimaSplineBuilder::default()
    }

    /// Evaluates the spline at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.curve.evaluate(x)
    }

    /// Evaluates the first derivative at `x`.
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        self.curve.derivative(x)
    }

    /// Evaluates the second derivative at `x`.
    #[must_use]
    pub fn second_derivative(&self, x: f64) -> f64 {
        self.curve.second_derivative(x)
    }

    /// Returns the knots.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        self.curve.knots()
    }

    /// Returns the fitted segments.
    #[must_use]
    pub fn segments(&self) -> &[CubicSegment] {
        self.curve.segments()
    }

    /// Returns the underlying piecewise cubic.
    #[must_use]
    pub fn as_piecewise(&self) -> &PiecewiseCubic {
        &self.curve
    }

    /// Consumes the spline and returns the underlying piecewise cubic.
    #[must_use]
    pub fn into_piecewise(self) -> PiecewiseCubic {
        self.curve
    }
}

impl Interpolator for AkimaSpline {
    fn interpolate(&self, x: f64) -> SplineResult<f64> {
        Ok(self.evaluate(x))
    }

    fn derivative(&self, x: f64) -> SplineResult<f64> {
        Ok(AkimaSpline::derivative(self, x))
    }

    fn allows_extrapolation(&self) -> bool {
        true
    }

    fn min_x(&self) -> f64 {
        self.curve.min_x()
    }

    fn max_x(&self) -> f64 {
        self.curve.max_x()
    }
}

/// Builder for [`AkimaSpline`].
///
/// Missing sequences are reported as [`SplineError::NullInput`].
#[derive(Debug, Clone, Default)]
pub struct AkimaSplineBuilder {
    knots: Option<Vec<f64>>,
    values: Option<Vec<f64>>,
    config: AkimaConfig,
}

impl AkimaSplineBuilder {
    /// Sets the knots.
    #[must_use]
    pub fn knots(mut self, knots: impl Into<Vec<f64>>) -> Self {
        self.knots = Some(knots.into());
        self
    }

    /// Sets the values at the knots.
    #[must_use]
    pub fn values(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.values = Some(values.into());
        self
    }

    /// Sets the fitting configuration.
    #[must_use]
    pub fn config(mut self, config: AkimaConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the inputs and fits the spline.
    pub fn build(self) -> SplineResult<AkimaSpline> {
        let (xs, ys) = validate_optional(
            self.knots.as_deref(),
            self.values.as_deref(),
            AKIMA_MIN_POINTS,
        )?;
        AkimaInterpolator::with_config(self.config).fit(xs, ys)
    }
}
