//! Numerical integration.
//!
//! The only rule needed here is the closed composite Simpson's 1/3 rule on a
//! fixed, even number of equally spaced sub-intervals. It is the single
//! kernel behind every probability the crate computes.

use nm_core::{
    ensure,
    errors::{Error, Result},
    settings::DEFAULT_SIMPSON_INTERVALS,
    Real, Size,
};

use crate::distributions::Density;

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

// ── Simpson ───────────────────────────────────────────────────────────────────

/// Composite Simpson's 1/3 rule on a fixed number of sub-intervals.
///
/// The rule needs an even interval count. An odd count is silently rounded
/// up to the next even number when the integrator is built, so
/// `SimpsonRule::new(99)` and `SimpsonRule::new(100)` are the same rule.
///
/// Reversed limits (`b < a`) are not special-cased: the step `h` goes
/// negative and the result is the negated integral over `[b, a]`. Callers
/// that want the area regardless of orientation must order the limits
/// themselves.
///
/// ```
/// use nm_math::integrals::{Integrator, SimpsonRule};
/// // ∫₀¹ x² dx = 1/3, exact for Simpson since the integrand is a polynomial of degree ≤ 3
/// let s = SimpsonRule::new(10);
/// let v = s.integrate(|x| x * x, 0.0, 1.0).unwrap();
/// assert!((v - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpsonRule {
    intervals: Size,
}

impl SimpsonRule {
    /// Create a Simpson integrator with `intervals` sub-intervals, rounded up
    /// to an even count.
    pub fn new(intervals: Size) -> Self {
        Self {
            intervals: intervals + intervals % 2,
        }
    }

    /// The (even) number of sub-intervals.
    pub fn intervals(&self) -> Size {
        self.intervals
    }

    /// Integrate the density of a distribution family on `[lower, upper]`.
    ///
    /// The density carries its own parameters, so each sample point is just
    /// `density.pdf(x)`.
    pub fn integrate_density(&self, density: &Density, lower: Real, upper: Real) -> Result<Real> {
        self.integrate(|x| density.pdf(x), lower, upper)
    }
}

impl Default for SimpsonRule {
    fn default() -> Self {
        Self::new(DEFAULT_SIMPSON_INTERVALS)
    }
}

impl Integrator for SimpsonRule {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        let n = self.intervals;
        if n == 0 {
            return Err(Error::InvalidArgument(
                "SimpsonRule: intervals must be > 0".into(),
            ));
        }
        ensure!(
            a.is_finite() && b.is_finite(),
            "SimpsonRule: limits must be finite, got [{a}, {b}]"
        );
        if a == b {
            return Ok(0.0);
        }

        let h = (b - a) / n as Real;
        // S = h/3 * [f(x₀) + 4*Σf(odd) + 2*Σf(even interior) + f(x_N)]
        let mut sum_odd = 0.0;
        let mut sum_even = 0.0;
        for i in 1..n {
            let x = a + i as Real * h;
            if i % 2 == 1 {
                sum_odd += f(x);
            } else {
                sum_even += f(x);
            }
        }
        Ok(h / 3.0 * (f(a) + 4.0 * sum_odd + 2.0 * sum_even + f(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn odd_intervals_round_up() {
        assert_eq!(SimpsonRule::new(99).intervals(), 100);
        assert_eq!(SimpsonRule::new(100).intervals(), 100);
        assert_eq!(SimpsonRule::new(1).intervals(), 2);
        assert_eq!(SimpsonRule::default().intervals(), 100);
    }

    #[test]
    fn odd_and_even_give_identical_results() {
        let f = |x: Real| (-x * x).exp();
        let odd = SimpsonRule::new(99).integrate(f, -1.0, 2.0).unwrap();
        let even = SimpsonRule::new(100).integrate(f, -1.0, 2.0).unwrap();
        assert_eq!(odd, even);
    }

    #[test]
    fn exact_for_cubics() {
        // ∫₋₁² (x³ - 2x + 1) dx = [x⁴/4 - x² + x]₋₁² = 2 - (-1.75) = 3.75
        let v = SimpsonRule::new(2)
            .integrate(|x| x * x * x - 2.0 * x + 1.0, -1.0, 2.0)
            .unwrap();
        assert_abs_diff_eq!(v, 3.75, epsilon = 1e-12);
    }

    #[test]
    fn sine_over_half_period() {
        let v = SimpsonRule::default()
            .integrate(|x| x.sin(), 0.0, std::f64::consts::PI)
            .unwrap();
        assert_abs_diff_eq!(v, 2.0, epsilon = 1e-7);
    }

    #[test]
    fn reversed_limits_negate() {
        let s = SimpsonRule::default();
        let fwd = s.integrate(|x| x.exp(), 0.0, 1.0).unwrap();
        let rev = s.integrate(|x| x.exp(), 1.0, 0.0).unwrap();
        assert_abs_diff_eq!(fwd, -rev, epsilon = 1e-12);
    }

    #[test]
    fn empty_interval_is_zero() {
        let v = SimpsonRule::default().integrate(|_| 1.0, 3.0, 3.0).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn zero_intervals_rejected() {
        let err = SimpsonRule::new(0).integrate(|x| x, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn infinite_limits_rejected() {
        let err = SimpsonRule::default()
            .integrate(|x| x, Real::NEG_INFINITY, 0.0)
            .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }
}
