//! Cubic polynomial segments.

/// A cubic polynomial in ascending-power form.
///
/// Represents `p(t) = c0 + c1*t + c2*t^2 + c3*t^3`, where `t` is measured from
/// the left knot of the segment the polynomial belongs to.
///
/// # Example
///
/// ```rust
/// use akima_spline::polynomial::CubicSegment;
///
/// // p(t) = 1 + 2t + 3t^2 + 4t^3
/// let p = CubicSegment::new([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(p.value(1.0), 10.0);
/// assert_eq!(p.derivative(1.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    coefficients: [f64; 4],
}

impl CubicSegment {
    /// Creates a segment from ascending-order coefficients `[c0, c1, c2, c3]`.
    #[must_use]
    pub const fn new(coefficients: [f64; 4]) -> Self {
        Self { coefficients }
    }

    /// Builds the cubic that matches values and slopes at both ends of an
    /// interval of width `w`.
    ///
    /// `y0`, `d0` are the value and slope at `t = 0`; `y1`, `d1` at `t = w`.
    #[must_use]
    pub fn from_hermite(y0: f64, y1: f64, d0: f64, d1: f64, w: f64) -> Self {
        let w2 = w * w;
        let c2 = (3.0 * (y1 - y0) / w - 2.0 * d0 - d1) / w;
        let c3 = (2.0 * (y0 - y1) / w + d0 + d1) / w2;
        Self::new([y0, d0, c2, c3])
    }

    /// Returns the coefficients in ascending order.
    #[must_use]
    pub const fn coefficients(&self) -> [f64; 4] {
        self.coefficients
    }

    /// Evaluates the polynomial at offset `t` using Horner's method.
    #[inline]
    #[must_use]
    pub fn value(&self, t: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coefficients;
        ((c3 * t + c2) * t + c1) * t + c0
    }

    /// Evaluates the first derivative at offset `t`.
    #[inline]
    #[must_use]
    pub fn derivative(&self, t: f64) -> f64 {
        let [_, c1, c2, c3] = self.coefficients;
        (3.0 * c3 * t + 2.0 * c2) * t + c1
    }

    /// Evaluates the second derivative at offset `t`.
    #[inline]
    #[must_use]
    pub fn second_derivative(&self, t: f64) -> f64 {
        let [_, _, c2, c3] = self.coefficients;
        6.0 * c3 * t + 2.0 * c2
    }

    /// Returns the derivative polynomial (its cubic coefficient is zero).
    #[must_use]
    pub fn derivative_segment(&self) -> Self {
        let [_, c1, c2, c3] = self.coefficients;
        Self::new([c1, 2.0 * c2, 3.0 * c3, 0.0])
    }

    /// Returns the degree after discarding zero leading coefficients.
    ///
    /// The zero polynomial reports degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|&c| c != 0.0)
            .unwrap_or(0)
    }
}
