//! Cubic spline interpolation.
//!
//! - [`CubicSpline`]: piecewise cubic through every knot, C2 continuous,
//!   with [`SplineBoundary::NotAKnot`] or [`SplineBoundary::Natural`] ends
//! - [`cspline_interp`] / [`cspline_deriv`]: fit-and-evaluate in one call
//!
//! # Choosing an End Condition
//!
//! | Boundary | Min points | Reproduces cubics | Use Case |
//! |----------|------------|-------------------|----------|
//! | Not-a-knot | 4 | Yes | General interpolation (default) |
//! | Natural | 3 | No | Curves expected to flatten at the ends |

mod cubic_spline;
mod functions;

pub use cubic_spline::CubicSpline;
pub use functions::{cspline_deriv, cspline_interp};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

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

/// End condition used to close the spline system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineBoundary {
    /// Third derivative continuous across the second and second-to-last knots.
    #[default]
    NotAKnot,
    /// Zero second derivative at both ends.
    Natural,
}

impl SplineBoundary {
    /// Minimum number of knots the end condition needs.
    pub fn min_points(self) -> usize {
        match self {
            Self::NotAKnot => 4,
            Self::Natural => 3,
        }
    }
}

/// Which derivative of the spline to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivativeOrder {
    /// The spline value itself.
    #[default]
    Value,
    /// First derivative.
    First,
    /// Second derivative.
    Second,
    /// Third derivative (piecewise constant).
    Third,
}

impl TryFrom<u32> for DerivativeOrder {
    type Error = MathError;

    fn try_from(order: u32) -> MathResult<Self> {
        match order {
            0 => Ok(Self::Value),
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            _ => Err(MathError::UnsupportedDerivative { order }),
        }
    }
}

impl From<DerivativeOrder> for u32 {
    fn from(order: DerivativeOrder) -> Self {
        match order {
            DerivativeOrder::Value => 0,
            DerivativeOrder::First => 1,
            DerivativeOrder::Second => 2,
            DerivativeOrder::Third => 3,
        }
    }
}
