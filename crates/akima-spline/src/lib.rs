//! # Akima Spline
//!
//! One-dimensional Akima cubic spline interpolation.
//!
//! This crate provides:
//!
//! - **Validation**: Length, size and knot-ordering checks
//! - **Derivatives**: Akima slope estimation with three-point boundary slopes
//! - **Hermite conversion**: Values and slopes to ascending-power cubics
//! - **Interpolation**: Piecewise cubic evaluation with end-segment clamping
//!
//! ## Design Philosophy
//!
//! - **Local**: Each segment depends only on nearby data, so an outlier only
//!   perturbs its neighbours
//! - **Fit once, evaluate many**: Fitting is `O(n)`; evaluation is a binary
//!   search plus one Horner step and never fails
//! - **Immutable**: A fitted spline owns copies of its knots and segments and
//!   is `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use akima_spline::prelude::*;
//!
//! let xs = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
//! let ys = [40.0, 10.0, 17.0, 39.0, 99.0, 120.0, 30.0, 10.0];
//!
//! let spline = fit(&xs, &ys).unwrap();
//! let y = spline.evaluate(35.0);
//! assert!(y.is_finite());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::uninlined_format_args)]

pub mod derivatives;
pub mod error;
pub mod hermite;
pub mod interpolation;
pub mod polynomial;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::derivatives::{akima_derivatives, three_point_derivative};
    pub use crate::error::{SplineError, SplineResult};
    pub use crate::hermite::hermite_segments;
    pub use crate::interpolation::{
        fit, AkimaConfig, AkimaInterpolator, AkimaSpline, AkimaSplineBuilder, Interpolator,
        PiecewiseCubic,
    };
    pub use crate::polynomial::CubicSegment;
    pub use crate::validation::OrderDirection;
}

pub use error::{SplineError, SplineResult};
pub use interpolation::{fit, AkimaSpline};
