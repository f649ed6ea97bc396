//! Square root by Newton-Raphson iteration on `f(x) = x² - m`.
//!
//! The iterate is seeded with `m` itself and updated with
//! `x ← x - (x² - m) / 2x` until `|m - x²|` drops below the tolerance.

use crate::domain::model::{
    Convergence, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, INVALID_DOMAIN_SENTINEL,
};
use crate::domain::ports::RootSolver;
use crate::utils::error::{Result, SqrtError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSqrt {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for NewtonSqrt {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

impl NewtonSqrt {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn solve(&self, m: f64) -> Result<Convergence> {
        if !m.is_finite() {
            return Err(SqrtError::NonFiniteInput { value: m });
        }
        if m < 0.0 {
            return Err(SqrtError::InvalidDomain { value: m });
        }
        // f'(0) = 0, the update would divide by zero
        if m == 0.0 {
            return Ok(Convergence {
                root: 0.0,
                iterations: 0,
                residual: 0.0,
            });
        }

        let mut x = m;
        let mut iterations = 0;
        loop {
            let residual = (m - x * x).abs();
            if !residual.is_finite() || !x.is_finite() {
                tracing::warn!(value = m, iterations, "iterate overflowed");
                return Err(SqrtError::NumericOverflow { value: m });
            }
            if residual < self.tolerance {
                tracing::debug!(value = m, root = x, iterations, residual, "converged");
                return Ok(Convergence {
                    root: x,
                    iterations,
                    residual,
                });
            }
            if iterations >= self.max_iterations {
                tracing::warn!(value = m, iterations, last_estimate = x, "iteration cap reached");
                return Err(SqrtError::ConvergenceFailure {
                    value: m,
                    iterations,
                    last_estimate: x,
                });
            }

            let next = x - (x * x - m) / (2.0 * x);
            iterations += 1;
            if next == x {
                // fixed point short of the tolerance, further updates cannot help
                tracing::warn!(value = m, iterations, last_estimate = x, "iterate stalled");
                return Err(SqrtError::ConvergenceFailure {
                    value: m,
                    iterations,
                    last_estimate: x,
                });
            }
            x = next;
            tracing::trace!(iteration = iterations, estimate = x, "newton step");
        }
    }

    /// Sentinel form of [`NewtonSqrt::solve`].
    pub fn sqrt(&self, m: f64) -> f64 {
        self.solve_or_sentinel(m)
    }
}

impl RootSolver for NewtonSqrt {
    fn solve(&self, m: f64) -> Result<Convergence> {
        NewtonSqrt::solve(self, m)
    }
}

/// Square root of `m` with the default tolerance.
///
/// Returns `-1.0` for negative input, and for any other failure; callers must
/// treat every negative return as an error rather than a value.
pub fn sqrt_newton(m: f64) -> f64 {
    try_sqrt_newton(m).unwrap_or(INVALID_DOMAIN_SENTINEL)
}

pub fn try_sqrt_newton(m: f64) -> Result<f64> {
    NewtonSqrt::default().solve(m).map(|c| c.root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_of_two() {
        let root = sqrt_newton(2.0);
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
        assert!((root * root - 2.0).abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_sqrt_of_four() {
        assert!((sqrt_newton(4.0) - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_zero_is_special_cased() {
        let result = NewtonSqrt::default().solve(0.0).unwrap();
        assert_eq!(result.root, 0.0);
        assert_eq!(result.iterations, 0);
        assert_eq!(sqrt_newton(-0.0), 0.0);
    }

    #[test]
    fn test_seed_already_converged() {
        let result = NewtonSqrt::default().solve(1.0).unwrap();
        assert_eq!(result.root, 1.0);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.residual, 0.0);
    }

    #[test]
    fn test_negative_input() {
        assert_eq!(sqrt_newton(-1.0), -1.0);
        assert_eq!(sqrt_newton(-1e-300), -1.0);
        assert!(matches!(
            try_sqrt_newton(-9.0),
            Err(SqrtError::InvalidDomain { value }) if value == -9.0
        ));
    }

    #[test]
    fn test_non_finite_input() {
        assert!(matches!(
            try_sqrt_newton(f64::NAN),
            Err(SqrtError::NonFiniteInput { .. })
        ));
        assert!(matches!(
            try_sqrt_newton(f64::INFINITY),
            Err(SqrtError::NonFiniteInput { .. })
        ));
        assert_eq!(sqrt_newton(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn test_overflow_reported() {
        assert!(matches!(
            try_sqrt_newton(f64::MAX),
            Err(SqrtError::NumericOverflow { .. })
        ));
        assert_eq!(sqrt_newton(1e200), -1.0);
    }

    #[test]
    fn test_iteration_cap() {
        let solver = NewtonSqrt::new(DEFAULT_TOLERANCE, 2);
        match solver.solve(1e6) {
            Err(SqrtError::ConvergenceFailure {
                value,
                iterations,
                last_estimate,
            }) => {
                assert_eq!(value, 1e6);
                assert_eq!(iterations, 2);
                assert!(last_estimate > 1000.0);
            }
            other => panic!("expected convergence failure, got {:?}", other),
        }
        assert_eq!(solver.sqrt(1e6), -1.0);
    }

    #[test]
    fn test_large_power_of_two_converges_exactly() {
        assert_eq!(sqrt_newton(2f64.powi(200)), 2f64.powi(100));
        assert_eq!(sqrt_newton(2f64.powi(300)), 2f64.powi(150));

        let result = NewtonSqrt::default().solve(2f64.powi(200)).unwrap();
        assert!(result.iterations > 100);
        assert_eq!(result.residual, 0.0);
    }

    #[test]
    fn test_unreachable_tolerance_reports_failure() {
        let m = 67125960.1392339;
        match try_sqrt_newton(m) {
            Err(SqrtError::ConvergenceFailure {
                value,
                iterations,
                last_estimate,
            }) => {
                assert_eq!(value, m);
                assert!(iterations <= DEFAULT_MAX_ITERATIONS);
                assert!((last_estimate - m.sqrt()).abs() < 1e-6);
            }
            other => panic!("expected convergence failure, got {:?}", other),
        }
        assert_eq!(sqrt_newton(m), -1.0);
    }

    #[test]
    fn test_loose_tolerance_stops_early() {
        // 2 -> 1.5, residual 0.25
        let result = NewtonSqrt::new(1.0, 10).solve(2.0).unwrap();
        assert_eq!(result.root, 1.5);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.residual, 0.25);
    }

    #[test]
    fn test_small_input_overshoots_then_converges() {
        let result = NewtonSqrt::default().solve(0.25).unwrap();
        assert!((result.root - 0.5).abs() < 1e-8);
        assert!(result.iterations > 1);
    }
}
