//! Input validation for knot and value sequences.
//!
//! The order check is a plain predicate over an explicit [`OrderDirection`]
//! and a strictness flag; the `check_*`/`validate_*` functions turn its answer
//! into a [`SplineError`].

use std::cmp::Ordering;

use log::debug;

use crate::error::{SplineError, SplineResult};

/// Direction of a monotonic ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    /// Each element is greater than (or equal to) its predecessor.
    Increasing,
    /// Each element is less than (or equal to) its predecessor.
    Decreasing,
}

impl OrderDirection {
    /// Returns true if `previous -> current` respects this direction.
    ///
    /// NaN never respects any ordering.
    #[must_use]
    pub fn accepts(self, previous: f64, current: f64, strict: bool) -> bool {
        let wanted = match self {
            Self::Increasing => Ordering::Greater,
            Self::Decreasing => Ordering::Less,
        };
        match current.partial_cmp(&previous) {
            Some(ord) if ord == wanted => true,
            Some(Ordering::Equal) => !strict,
            _ => false,
        }
    }
}

/// Returns the index of the first element that breaks the requested order,
/// or `None` if the whole sequence is ordered.
///
/// Sequences with fewer than two elements are always ordered.
#[must_use]
pub fn order_violation(values: &[f64], direction: OrderDirection, strict: bool) -> Option<usize> {
    values
        .windows(2)
        .position(|pair| !direction.accepts(pair[0], pair[1], strict))
        .map(|i| i + 1)
}

/// Returns true if `values` is monotonic in `direction`.
#[must_use]
pub fn is_monotonic(values: &[f64], direction: OrderDirection, strict: bool) -> bool {
    order_violation(values, direction, strict).is_none()
}

/// Checks that knots are strictly increasing.
pub fn check_strictly_increasing(xs: &[f64]) -> SplineResult<()> {
    match order_violation(xs, OrderDirection::Increasing, true) {
        None => Ok(()),
        Some(index) => {
            debug!(
                "rejecting knots: x[{}] = {} does not exceed x[{}] = {}",
                index,
                xs[index],
                index - 1,
                xs[index - 1]
            );
            Err(SplineError::NotStrictlyIncreasing {
                index,
                previous: xs[index - 1],
                current: xs[index],
            })
        }
    }
}

/// Validates a knot/value pair for a construction that needs at least
/// `min_points` points.
///
/// Checks run in a fixed order: lengths, point count, then knot ordering.
pub fn validate_inputs(xs: &[f64], ys: &[f64], min_points: usize) -> SplineResult<()> {
    if xs.len() != ys.len() {
        debug!("rejecting input: {} knots but {} values", xs.len(), ys.len());
        return Err(SplineError::size_mismatch(xs.len(), ys.len()));
    }
    if xs.len() < min_points {
        debug!("rejecting input: {} points, need {}", xs.len(), min_points);
        return Err(SplineError::too_few_points(min_points, xs.len()));
    }
    check_strictly_increasing(xs)
}

/// Validates sequences that may be absent, returning them on success.
///
/// A missing knot sequence is reported before a missing value sequence.
pub fn validate_optional<'a>(
    xs: Option<&'a [f64]>,
    ys: Option<&'a [f64]>,
    min_points: usize,
) -> SplineResult<(&'a [f64], &'a [f64])> {
    let xs = xs.ok_or_else(|| SplineError::null_input("knot"))?;
    let ys = ys.ok_or_else(|| SplineError::null_input("value"))?;
    validate_inputs(xs, ys, min_points)?;
    Ok((xs, ys))
}
