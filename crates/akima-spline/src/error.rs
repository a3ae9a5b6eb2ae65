//! Error types for spline construction.

use thiserror::Error;

/// A specialized Result type for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;

/// Errors that can occur while fitting or assembling a spline.
///
/// Every variant is raised at construction time. Evaluating a fitted spline
/// never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// A knot or value sequence was not supplied.
    #[error("Missing input: {name} sequence was not provided")]
    NullInput {
        /// Which sequence is missing.
        name: &'static str,
    },

    /// Two sequences that must be paired positionally differ in length.
    #[error("Size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch {
        /// Length of the reference sequence (usually the knots).
        expected: usize,
        /// Length of the sequence being paired with it.
        actual: usize,
    },

    /// Not enough points for the requested construction.
    #[error("Too few points: need at least {required}, got {actual}")]
    TooFewPoints {
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Knots are not in strictly increasing order.
    #[error("Knots must be strictly increasing: x[{index}] = {current} follows {previous}")]
    NotStrictlyIncreasing {
        /// Index of the first offending knot.
        index: usize,
        /// Knot value at `index - 1`.
        previous: f64,
        /// Knot value at `index`.
        current: f64,
    },

    /// An internal consistency check failed. This is a defect in the crate,
    /// never a consequence of caller input.
    #[error("Internal invariant violated: {reason}")]
    InternalInvariantViolation {
        /// Description of the broken invariant.
        reason: String,
    },
}

impl SplineError {
    /// Creates a missing-input error.
    #[must_use]
    pub fn null_input(name: &'static str) -> Self {
        Self::NullInput { name }
    }

    /// Creates a size mismatch error.
    #[must_use]
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Creates a too-few-points error.
    #[must_use]
    pub fn too_few_points(required: usize, actual: usize) -> Self {
        Self::TooFewPoints { required, actual }
    }

    /// Creates an internal invariant error.
    #[must_use]
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::InternalInvariantViolation {
            reason: reason.into(),
        }
    }

    /// Returns true if the error was caused by caller input rather than a
    /// defect in the crate.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::InternalInvariantViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplineError::too_few_points(5, 4);
        assert!(err.to_string().contains("at least 5"));

        let err = SplineError::NotStrictlyIncreasing {
            index: 2,
            previous: 2.0,
            current: 2.0,
        };
        assert!(err.to_string().contains("x[2]"));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(SplineError::null_input("knot").is_input_error());
        assert!(SplineError::size_mismatch(5, 3).is_input_error());
        assert!(!SplineError::internal("segment table length").is_input_error());
    }
}
