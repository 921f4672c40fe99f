//! # Solvespline Math
//!
//! Cubic spline interpolation and bounded bisection root search.
//!
//! This crate provides:
//!
//! - **Interpolation**: Interpolating cubic splines with value and derivative
//!   evaluation ([`interpolation::cspline_interp`], [`interpolation::cspline_deriv`])
//! - **Solvers**: Bisection root search that stops once the objective rounds
//!   to zero at a configurable number of decimals
//! - **Linear Algebra**: The tridiagonal solver behind the spline fit
//!
//! ## Example: Inverse Interpolation
//!
//! ```rust
//! use solvespline_math::prelude::*;
//!
//! let spline = CubicSpline::fit(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0],
//!     vec![1.0, 2.0, 5.0, 10.0, 17.0],
//!     SplineBoundary::NotAKnot,
//! )
//! .unwrap();
//!
//! // Where does the curve reach 7.25?
//! let target = |x: f64| spline.interpolate(x).unwrap_or(f64::NAN) - 7.25;
//! let result = bisection(target, 0.0, 4.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 2.5).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        cspline_deriv, cspline_interp, CubicSpline, DerivativeOrder, Interpolator, SplineBoundary,
    };
    pub use crate::solvers::{
        bisection, Bisection, BisectionSolver, BisectionStep, BracketingSolver, Monotonicity,
        SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
