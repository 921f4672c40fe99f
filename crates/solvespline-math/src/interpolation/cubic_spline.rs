//! Interpolating cubic spline.

use crate::error::{MathError, MathResult};
use crate::interpolation::{DerivativeOrder, Interpolator, SplineBoundary};
use crate::linear_algebra::solve_tridiagonal;

/// Interpolating cubic spline.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives. The end
/// condition is chosen with [`SplineBoundary`].
///
/// Outside the knot range the end polynomials are extended, but only when
/// extrapolation has been enabled with [`CubicSpline::with_extrapolation`].
///
/// # Example
///
/// ```rust
/// use solvespline_math::interpolation::{
///     CubicSpline, DerivativeOrder, Interpolator, SplineBoundary,
/// };
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 8.0, 27.0];
///
/// let spline = CubicSpline::fit(xs, ys, SplineBoundary::NotAKnot).unwrap();
/// let y = spline.interpolate(1.5).unwrap();
/// assert!((y - 3.375).abs() < 1e-12);
///
/// let slopes = spline.evaluate(&[0.5, 2.5], DerivativeOrder::First).unwrap();
/// assert!((slopes[1] - 18.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    boundary: SplineBoundary,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be sorted in ascending order)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points or if lengths differ.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Self::fit(xs, ys, SplineBoundary::Natural)
    }

    /// Fits a cubic spline with the given end condition.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer points than the end condition
    /// needs, if lengths differ, if any value is not finite, or if `xs` is
    /// not strictly increasing.
    pub fn fit(xs: Vec<f64>, ys: Vec<f64>, boundary: SplineBoundary) -> MathResult<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < boundary.min_points() {
            return Err(MathError::insufficient_data(
                boundary.min_points(),
                xs.len(),
            ));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("spline data must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        let y2s = match boundary {
            SplineBoundary::Natural => natural_second_derivatives(&xs, &ys)?,
            SplineBoundary::NotAKnot => not_a_knot_second_derivatives(&xs, &ys)?,
        };

        Ok(Self {
            xs,
            ys,
            y2s,
            boundary,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// End condition the spline was fitted with.
    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
    }

    /// Knot x coordinates.
    pub fn knots(&self) -> &[f64] {
        &self.xs
    }

    /// Second derivatives at the knots.
    pub fn second_derivatives(&self) -> &[f64] {
        &self.y2s
    }

    /// Evaluates the spline, or one of its derivatives, at `x`.
    pub fn eval(&self, x: f64, order: DerivativeOrder) -> MathResult<f64> {
        self.check_range(x)?;

        let i = self.find_segment(x);

        let x_lo = self.xs[i];
        let x_hi = self.xs[i + 1];
        let y_lo = self.ys[i];
        let y_hi = self.ys[i + 1];
        let y2_lo = self.y2s[i];
        let y2_hi = self.y2s[i + 1];

        let h = x_hi - x_lo;
        let a = (x_hi - x) / h;
        let b = (x - x_lo) / h;

        let value = match order {
            DerivativeOrder::Value => {
                a * y_lo
                    + b * y_hi
                    + ((a * a * a - a) * y2_lo + (b * b * b - b) * y2_hi) * (h * h) / 6.0
            }
            DerivativeOrder::First => {
                (y_hi - y_lo) / h - (3.0 * a * a - 1.0) * h * y2_lo / 6.0
                    + (3.0 * b * b - 1.0) * h * y2_hi / 6.0
            }
            DerivativeOrder::Second => a * y2_lo + b * y2_hi,
            DerivativeOrder::Third => (y2_hi - y2_lo) / h,
        };

        Ok(value)
    }

    /// Evaluates the spline, or one of its derivatives, at every query point.
    pub fn evaluate(&self, query: &[f64], order: DerivativeOrder) -> MathResult<Vec<f64>> {
        query.iter().map(|&x| self.eval(x, order)).collect()
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if x.is_nan() {
            return Err(MathError::invalid_input("query point is NaN"));
        }
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        match self.xs.binary_search_by(|knot| {
            knot.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)
        }) {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.eval(x, DerivativeOrder::Value)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.eval(x, DerivativeOrder::First)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Right-hand side of the continuity equation at interior knot `i`.
fn curvature_rhs(xs: &[f64], ys: &[f64], i: usize) -> f64 {
    6.0 * ((ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]) - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]))
}

/// Computes the second derivatives for a natural cubic spline.
fn natural_second_derivatives(xs: &[f64], ys: &[f64]) -> MathResult<Vec<f64>> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

    let mut lower = vec![0.0; n - 1];
    let mut diag = vec![1.0; n];
    let mut upper = vec![0.0; n - 1];
    let mut rhs = vec![0.0; n];

    // Natural spline: y2[0] = y2[n-1] = 0, rows 0 and n-1 stay identity
    for i in 1..n - 1 {
        lower[i - 1] = h[i - 1];
        diag[i] = 2.0 * (h[i - 1] + h[i]);
        upper[i] = h[i];
        rhs[i] = curvature_rhs(xs, ys, i);
    }

    solve_tridiagonal(&lower, &diag, &upper, &rhs)
}

/// Computes the second derivatives for a not-a-knot cubic spline.
///
/// The end second derivatives are eliminated using third-derivative
/// continuity at `xs[1]` and `xs[n-2]`, leaving a tridiagonal system in the
/// interior unknowns.
fn not_a_knot_second_derivatives(xs: &[f64], ys: &[f64]) -> MathResult<Vec<f64>> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let m = n - 2;

    let mut lower = vec![0.0; m - 1];
    let mut diag = vec![0.0; m];
    let mut upper = vec![0.0; m - 1];
    let mut rhs = vec![0.0; m];

    for k in 0..m {
        let i = k + 1;
        diag[k] = 2.0 * (h[i - 1] + h[i]);
        if k > 0 {
            lower[k - 1] = h[i - 1];
        }
        if k + 1 < m {
            upper[k] = h[i];
        }
        rhs[k] = curvature_rhs(xs, ys, i);
    }

    let (h0, h1) = (h[0], h[1]);
    diag[0] += h0 + h0 * h0 / h1;
    upper[0] -= h0 * h0 / h1;

    let (hl, hp) = (h[n - 2], h[n - 3]);
    diag[m - 1] += hl + hl * hl / hp;
    lower[m - 2] -= hl * hl / hp;

    let interior = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;

    let mut y2s = Vec::with_capacity(n);
    let first = interior[0] + h0 / h1 * (interior[0] - interior[1]);
    let last = interior[m - 1] + hl / hp * (interior[m - 1] - interior[m - 2]);
    y2s.push(first);
    y2s.extend_from_slice(&interior);
    y2s.push(last);

    Ok(y2s)
}
