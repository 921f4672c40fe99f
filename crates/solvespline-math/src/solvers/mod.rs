//! Root-finding algorithms.
//!
//! - [`bisection`]: bracketing search that halves the interval until the
//!   objective, rounded to a fixed number of decimals, is zero
//!
//! The search is bounded by [`SolverConfig::max_iterations`] and reports
//! [`MathError::ConvergenceFailed`](crate::error::MathError::ConvergenceFailed)
//! when the cap is reached, so a bracket without a root cannot hang the caller.
//!
//! # Example
//!
//! ```rust
//! use solvespline_math::solvers::{bisection, SolverConfig};
//!
//! let result = bisection(|x: f64| x - 0.3, 0.0, 1.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.3).abs() < 1e-4);
//! ```

mod bisection;

pub use bisection::{bisection, Bisection, BisectionStep};

use serde::{Deserialize, Serialize};

use crate::error::MathResult;

/// Default number of decimal places the objective is rounded to.
pub const DEFAULT_DECIMALS: u32 = 4;

/// Default maximum iterations for root-finding algorithms.
///
/// Halving any finite `f64` bracket this many times collapses it to a single
/// representable value.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1100;

/// How the bracket is narrowed from the sign of the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Monotonicity {
    /// `f` increases across the bracket: a positive value moves the upper bound.
    Increasing,
    /// `f` decreases across the bracket: a positive value moves the lower bound.
    Decreasing,
    /// Evaluate `f` at the lower bound once and pick the rule from its sign.
    #[default]
    Detect,
}

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Decimal places the objective is rounded to before testing for zero.
    pub decimals: u32,
    /// Maximum number of midpoint evaluations.
    pub max_iterations: u32,
    /// Narrowing rule.
    pub direction: Monotonicity,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            direction: Monotonicity::Detect,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(decimals: u32, max_iterations: u32) -> Self {
        Self {
            decimals,
            max_iterations,
            ..Self::default()
        }
    }

    /// Sets the rounding precision.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the narrowing rule.
    #[must_use]
    pub fn with_direction(mut self, direction: Monotonicity) -> Self {
        self.direction = direction;
        self
    }

    /// Returns true if `value` rounds to zero at the configured precision.
    ///
    /// Rounding follows [`round_to_decimals`], so a value sitting exactly on
    /// half a unit in the last place rounds to zero.
    pub fn rounds_to_zero(&self, value: f64) -> bool {
        round_to_decimals(value, self.decimals) == 0.0
    }
}

/// Rounds `value` to `decimals` decimal places.
///
/// The exact binary value is rounded, ties to even, so `0.00185` (stored just
/// below the tie) rounds to `0.0018` and `0.5` rounds to `0.0`.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let precision = usize::try_from(decimals).unwrap_or(usize::MAX);
    format!("{value:.precision$}").parse().unwrap_or(value)
}

/// Trait for solvers that search inside a bracketing interval.
///
/// # Example
///
/// ```rust
/// use solvespline_math::solvers::{BisectionSolver, BracketingSolver, SolverConfig};
///
/// let solver = BisectionSolver;
/// let result = solver.solve(|x: f64| x * x - 2.0, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-4);
/// ```
pub trait BracketingSolver: Send + Sync {
    /// Solves for a root of `f` between `lower` and `upper`.
    fn solve<F>(
        &self,
        f: F,
        lower: f64,
        upper: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: FnMut(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Bisection solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl BracketingSolver for BisectionSolver {
    fn solve<F>(
        &self,
        f: F,
        lower: f64,
        upper: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: FnMut(f64) -> f64,
    {
        bisection(f, lower, upper, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_decimals(6)
            .with_max_iterations(50)
            .with_direction(Monotonicity::Decreasing);

        assert_eq!(config.decimals, 6);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.direction, Monotonicity::Decreasing);
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.decimals, 4);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.direction, Monotonicity::Detect);
        assert_eq!(SolverConfig::new(2, 10).direction, Monotonicity::Detect);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_relative_eq!(round_to_decimals(0.123_456, 4), 0.1235, epsilon = 1e-12);
        assert_relative_eq!(round_to_decimals(-0.123_444, 4), -0.1234, epsilon = 1e-12);
        assert_relative_eq!(round_to_decimals(2.5, 0), 2.0);
        assert_relative_eq!(round_to_decimals(0.5, 0), 0.0);
        assert_relative_eq!(round_to_decimals(0.00185, 4), 0.0018, epsilon = 1e-15);
        assert_relative_eq!(round_to_decimals(5e-7, 6), 0.0);
        assert_relative_eq!(round_to_decimals(1.0e300, 400), 1.0e300);
        assert!(round_to_decimals(f64::NAN, 4).is_nan());
        assert_eq!(round_to_decimals(f64::INFINITY, 4), f64::INFINITY);
    }

    #[test]
    fn test_rounds_to_zero() {
        let config = SolverConfig::default();
        assert!(config.rounds_to_zero(0.0));
        assert!(config.rounds_to_zero(4.9e-5));
        assert!(config.rounds_to_zero(-4.9e-5));
        assert!(!config.rounds_to_zero(5.1e-5));
        assert!(!config.rounds_to_zero(-1.0e-4));
        assert!(!config.rounds_to_zero(f64::NAN));

        let coarse = SolverConfig::default().with_decimals(1);
        assert!(coarse.rounds_to_zero(0.04));
        assert!(!coarse.rounds_to_zero(0.06));

        // Values on (or just below) the half-unit tie round to zero
        assert!(SolverConfig::default().with_decimals(0).rounds_to_zero(0.5));
        assert!(SolverConfig::default().with_decimals(6).rounds_to_zero(5e-7));
        assert!(SolverConfig::default().with_decimals(6).rounds_to_zero(-5e-7));
        assert!(!SolverConfig::default().with_decimals(0).rounds_to_zero(1.5));
    }

    #[test]
    fn test_config_from_json() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"decimals": 6, "direction": "decreasing"}"#).unwrap();

        assert_eq!(config.decimals, 6);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.direction, Monotonicity::Decreasing);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result = serde_json::from_str::<SolverConfig>(r#"{"tolerance": 1e-10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_solver_trait_bisection() {
        let solver = BisectionSolver;
        let f = |x: f64| x * x - 2.0;

        let result = solver.solve(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(SolverConfig::default().rounds_to_zero(f(result.root)));
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-4);
        assert_eq!(solver.name(), "Bisection");
    }
}
