//! Bisection root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{Monotonicity, SolverConfig, SolverResult};

/// One iteration of a bisection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep {
    /// 1-based iteration number.
    pub iteration: u32,
    /// Lower bound of the bracket the midpoint was taken from.
    pub lower: f64,
    /// Upper bound of the bracket the midpoint was taken from.
    pub upper: f64,
    /// Midpoint of the bracket.
    pub midpoint: f64,
    /// Objective value at the midpoint.
    pub value: f64,
    /// Whether `value` rounded to zero, ending the search.
    pub converged: bool,
}

impl BisectionStep {
    /// Width of the bracket this step bisected.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Bisection search as an iterator of [`BisectionStep`]s.
///
/// Each call to `next` evaluates the objective at the midpoint of the current
/// bracket and narrows it. Iteration ends after the step whose value rounds to
/// zero. The iterator itself is unbounded: if the objective never rounds to
/// zero it yields forever, so callers cap it (as [`bisection`] does with
/// [`SolverConfig::max_iterations`]).
///
/// # Example
///
/// ```rust
/// use solvespline_math::solvers::{Bisection, SolverConfig};
///
/// let steps: Vec<_> = Bisection::new(|x: f64| x - 0.3, 0.0, 1.0, &SolverConfig::default())
///     .take(100)
///     .collect();
///
/// assert!(steps.last().unwrap().converged);
/// assert_eq!(steps[1].width(), steps[0].width() / 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Bisection<F> {
    f: F,
    lower: f64,
    upper: f64,
    increasing: bool,
    config: SolverConfig,
    iteration: u32,
    finished: bool,
}

impl<F> Bisection<F>
where
    F: FnMut(f64) -> f64,
{
    /// Starts a search of `f` over `[var_min, var_max]`.
    ///
    /// With [`Monotonicity::Detect`] this evaluates `f(var_min)` once: a
    /// negative value selects the increasing rule, a positive one the
    /// decreasing rule. Zero or NaN at `var_min` falls back to increasing.
    ///
    /// The bracket is not validated.
    pub fn new(mut f: F, var_min: f64, var_max: f64, config: &SolverConfig) -> Self {
        let increasing = match config.direction {
            Monotonicity::Increasing => true,
            Monotonicity::Decreasing => false,
            Monotonicity::Detect => {
                let at_min = f(var_min);
                let increasing = at_min <= 0.0 || at_min.is_nan();
                debug!(
                    "bisection direction detected: f({var_min}) = {at_min}, \
                     increasing = {increasing}"
                );
                increasing
            }
        };

        Self {
            f,
            lower: var_min,
            upper: var_max,
            increasing,
            config: *config,
            iteration: 0,
            finished: false,
        }
    }

    /// Current bracket as `(lower, upper)`.
    pub fn bracket(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Whether the increasing narrowing rule is in effect.
    pub fn is_increasing(&self) -> bool {
        self.increasing
    }
}

impl<F> Iterator for Bisection<F>
where
    F: FnMut(f64) -> f64,
{
    type Item = BisectionStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.iteration = self.iteration.saturating_add(1);
        let midpoint = (self.lower + self.upper) / 2.0;
        let value = (self.f)(midpoint);
        let converged = self.config.rounds_to_zero(value);

        let step = BisectionStep {
            iteration: self.iteration,
            lower: self.lower,
            upper: self.upper,
            midpoint,
            value,
            converged,
        };

        if converged {
            self.finished = true;
        } else if !value.is_nan() {
            if (value > 0.0) == self.increasing {
                self.upper = midpoint;
            } else {
                self.lower = midpoint;
            }
        }

        Some(step)
    }
}

/// Bisection root search with rounded-zero convergence.
///
/// Repeatedly evaluates `f` at the midpoint of `[var_min, var_max]` until the
/// value, rounded to [`SolverConfig::decimals`] places, equals zero. The sign
/// of the value picks which half to keep, following
/// [`SolverConfig::direction`].
///
/// Preconditions, none of which are checked:
/// - `var_min < var_max`
/// - `f` is monotonic on the bracket and changes sign inside it
///
/// A root lying exactly on `var_min` or `var_max` is not supported; the
/// result in that case is whatever midpoint first rounds to zero, if any.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `var_min` - Lower bound of the bracket
/// * `var_max` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Returns
///
/// The accepted midpoint, the number of midpoints evaluated, and `f` at the
/// root. If `max_iterations` midpoints are evaluated without convergence the
/// search fails with [`MathError::ConvergenceFailed`].
///
/// # Example
///
/// ```rust
/// use solvespline_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-4);
/// ```
pub fn bisection<F>(
    f: F,
    var_min: f64,
    var_max: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: FnMut(f64) -> f64,
{
    let mut last_value = f64::NAN;

    let search = Bisection::new(f, var_min, var_max, config);
    for step in search.take(config.max_iterations as usize) {
        trace!(
            "bisection iteration {}: [{}, {}] f({}) = {}",
            step.iteration,
            step.lower,
            step.upper,
            step.midpoint,
            step.value
        );

        if step.converged {
            debug!(
                "bisection converged after {} iterations: root = {}",
                step.iteration, step.midpoint
            );
            return Ok(SolverResult {
                root: step.midpoint,
                iterations: step.iteration,
                residual: step.value,
            });
        }
        last_value = step.value;
    }

    warn!(
        "bisection on [{var_min}, {var_max}] did not converge within {} iterations",
        config.max_iterations
    );
    Err(MathError::convergence_failed(
        config.max_iterations,
        last_value.abs(),
    ))
}
