//! Linear algebra utilities.
//!
//! Only what the spline fit needs: a banded solver for the knot
//! second-derivative system.

use crate::error::{MathError, MathResult};

/// Pivots smaller than this fraction of their row's magnitude are treated as zero.
const RELATIVE_PIVOT_EPSILON: f64 = 1e-14;

/// Returns true if `pivot` vanishes relative to `scale`.
fn is_negligible(pivot: f64, scale: f64) -> bool {
    pivot.abs() <= RELATIVE_PIVOT_EPSILON * scale
}

/// Solves a tridiagonal system of equations with the Thomas algorithm.
///
/// The system has the form:
/// ```text
/// | b[0]  c[0]   0    ...   0      | | x[0]   |   | d[0]   |
/// | a[0]  b[1]  c[1]  ...   0      | | x[1]   |   | d[1]   |
/// |  0    a[1]  b[2]  ...   0      | | x[2]   | = | d[2]   |
/// | ...   ...   ...   ...  ...     | | ...    |   | ...    |
/// |  0     0     0  a[n-2] b[n-1]  | | x[n-1] |   | d[n-1] |
/// ```
///
/// # Arguments
///
/// * `a` - Lower diagonal (length n-1)
/// * `b` - Main diagonal (length n)
/// * `c` - Upper diagonal (length n-1)
/// * `d` - Right-hand side (length n)
///
/// # Returns
///
/// Solution vector x.
pub fn solve_tridiagonal(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> MathResult<Vec<f64>> {
    let n = b.len();
    if n == 0 {
        return if a.is_empty() && c.is_empty() && d.is_empty() {
            Ok(vec![])
        } else {
            Err(MathError::invalid_input(
                "Tridiagonal system has inconsistent dimensions",
            ))
        };
    }

    if a.len() != n - 1 || c.len() != n - 1 || d.len() != n {
        return Err(MathError::invalid_input(format!(
            "Tridiagonal system has inconsistent dimensions: a={}, b={}, c={}, d={}",
            a.len(),
            n,
            c.len(),
            d.len()
        )));
    }

    let first_scale = b[0].abs() + c.first().map_or(0.0, |v| v.abs());
    if is_negligible(b[0], first_scale) {
        return Err(MathError::SingularMatrix);
    }

    // Forward elimination
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    if n > 1 {
        c_prime[0] = c[0] / b[0];
    }
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let coupling = a[i - 1] * c_prime[i - 1];
        let denom = b[i] - coupling;
        if is_negligible(denom, b[i].abs() + coupling.abs()) {
            return Err(MathError::SingularMatrix);
        }

        if i < n - 1 {
            c_prime[i] = c[i] / denom;
        }
        d_prime[i] = (d[i] - a[i - 1] * d_prime[i - 1]) / denom;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];

    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tridiagonal_simple() {
        let a = vec![1.0, 1.0];
        let b = vec![2.0, 2.0, 2.0];
        let c = vec![1.0, 1.0];
        let d = vec![1.0, 2.0, 3.0];

        let x = solve_tridiagonal(&a, &b, &c, &d).unwrap();

        assert_relative_eq!(b[0] * x[0] + c[0] * x[1], d[0], epsilon = 1e-10);
        assert_relative_eq!(
            a[0] * x[0] + b[1] * x[1] + c[1] * x[2],
            d[1],
            epsilon = 1e-10
        );
        assert_relative_eq!(a[1] * x[1] + b[2] * x[2], d[2], epsilon = 1e-10);
    }

    #[test]
    fn test_tridiagonal_single_equation() {
        let x = solve_tridiagonal(&[], &[4.0], &[], &[2.0]).unwrap();
        assert_relative_eq!(x[0], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_tridiagonal_empty() {
        assert!(solve_tridiagonal(&[], &[], &[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_tridiagonal_dimension_mismatch() {
        let result = solve_tridiagonal(&[1.0], &[2.0, 2.0], &[1.0], &[1.0]);
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_tridiagonal_tiny_entries() {
        // Same system as `test_tridiagonal_simple`, scaled down by 1e-20
        let scale = 1e-20;
        let a = vec![scale, scale];
        let b = vec![2.0 * scale, 2.0 * scale, 2.0 * scale];
        let c = vec![scale, scale];
        let d = vec![scale, 2.0 * scale, 3.0 * scale];

        let tiny = solve_tridiagonal(&a, &b, &c, &d).unwrap();
        let unit = solve_tridiagonal(&[1.0, 1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0], &[1.0, 2.0, 3.0])
            .unwrap();

        for (x, y) in tiny.iter().zip(unit.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tridiagonal_zero_first_pivot() {
        let result = solve_tridiagonal(&[1.0], &[0.0, 1.0], &[1.0], &[1.0, 1.0]);
        assert_eq!(result, Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_tridiagonal_singular() {
        // Second row is a multiple of the first
        let result = solve_tridiagonal(&[2.0], &[1.0, 2.0], &[1.0], &[1.0, 2.0]);
        assert_eq!(result, Err(MathError::SingularMatrix));
    }
}
