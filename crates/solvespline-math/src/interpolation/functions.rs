//! One-shot spline fit and evaluation.
//!
//! Each call fits a not-a-knot [`CubicSpline`] through `(xs, ys)` with
//! extrapolation enabled and evaluates it at `query`. Fit once with
//! [`CubicSpline::fit`] instead when evaluating the same data repeatedly.

use crate::error::MathResult;
use crate::interpolation::{CubicSpline, DerivativeOrder, SplineBoundary};

fn fit_and_evaluate(
    query: &[f64],
    xs: &[f64],
    ys: &[f64],
    order: DerivativeOrder,
) -> MathResult<Vec<f64>> {
    CubicSpline::fit(xs.to_vec(), ys.to_vec(), SplineBoundary::NotAKnot)?
        .with_extrapolation()
        .evaluate(query, order)
}

/// Interpolates `(xs, ys)` with a cubic spline and returns its values at `query`.
///
/// # Example
///
/// ```rust
/// use solvespline_math::interpolation::cspline_interp;
///
/// let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
///
/// let values = cspline_interp(&[1.5, 2.5], &xs, &ys).unwrap();
/// assert!((values[0] - 2.25).abs() < 1e-12);
/// ```
pub fn cspline_interp(query: &[f64], xs: &[f64], ys: &[f64]) -> MathResult<Vec<f64>> {
    fit_and_evaluate(query, xs, ys, DerivativeOrder::Value)
}

/// Interpolates `(xs, ys)` with a cubic spline and returns its first
/// derivative at `query`.
///
/// # Example
///
/// ```rust
/// use solvespline_math::interpolation::cspline_deriv;
///
/// let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
///
/// let slopes = cspline_deriv(&[1.5], &xs, &ys).unwrap();
/// assert!((slopes[0] - 3.0).abs() < 1e-12);
/// ```
pub fn cspline_deriv(query: &[f64], xs: &[f64], ys: &[f64]) -> MathResult<Vec<f64>> {
    fit_and_evaluate(query, xs, ys, DerivativeOrder::First)
}
