//! Normal (Gaussian) distribution and its Simpson-integrated probabilities.

use std::f64::consts::PI;

use nm_core::{
    ensure,
    errors::{Error, Result},
    Real, Settings,
};

use super::Tail;
use crate::integrals::{Integrator, SimpsonRule};

/// The Gaussian probability density function.
///
/// `f(x) = exp(-½((x-μ)/σ)²) / (σ√(2π))`
///
/// Total on all real `x`. A zero `stdev` is not checked here and yields
/// `NaN` or `inf`; use [`Gaussian::new`] for a validated density.
#[inline]
pub fn gaussian_pdf(x: Real, mean: Real, stdev: Real) -> Real {
    let z = (x - mean) / stdev;
    (-0.5 * z * z).exp() / (stdev * (2.0 * PI).sqrt())
}

/// A Gaussian distribution with mean `μ` and standard deviation `σ > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mean: Real,
    stdev: Real,
}

impl Gaussian {
    /// Create a Gaussian distribution.
    ///
    /// A zero `stdev` is reported as [`Error::DivisionByZero`]; a negative or
    /// non-finite one as a precondition failure.
    pub fn new(mean: Real, stdev: Real) -> Result<Self> {
        if stdev == 0.0 {
            return Err(Error::DivisionByZero(
                "Gaussian standard deviation is zero".into(),
            ));
        }
        ensure!(mean.is_finite(), "Gaussian mean must be finite, got {mean}");
        ensure!(
            stdev.is_finite() && stdev > 0.0,
            "Gaussian standard deviation must be positive, got {stdev}"
        );
        Ok(Self { mean, stdev })
    }

    /// The standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            stdev: 1.0,
        }
    }

    /// Mean `μ`.
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// Standard deviation `σ`.
    pub fn stdev(&self) -> Real {
        self.stdev
    }

    /// Probability density at `x`.
    #[inline]
    pub fn pdf(&self, x: Real) -> Real {
        gaussian_pdf(x, self.mean, self.stdev)
    }

    /// One-sided probability `P(x > c)` or `P(x < c)`.
    ///
    /// Integrates the density with Simpson's rule from
    /// `μ - settings.lower_tail_sigmas·σ` (standing in for −∞) up to `c`,
    /// giving `P(x < c)`; the upper tail is its complement.
    ///
    /// A cut-off below the lower limit is not clamped: the integral runs
    /// backwards and `P(x < c)` comes out slightly negative.
    ///
    /// ```
    /// use nm_core::Settings;
    /// use nm_math::distributions::{Gaussian, Tail};
    /// let p = Gaussian::standard().probability(0.0, Tail::Upper, &Settings::default()).unwrap();
    /// assert!((p - 0.5).abs() < 1e-4);
    /// ```
    pub fn probability(&self, c: Real, tail: Tail, settings: &Settings) -> Result<Real> {
        let lower = self.mean - settings.lower_tail_sigmas * self.stdev;
        let below = SimpsonRule::new(settings.simpson_intervals)
            .integrate(|x| self.pdf(x), lower, c)?;
        Ok(match tail {
            Tail::Upper => 1.0 - below,
            Tail::Lower => below,
        })
    }

    /// Probability of the symmetric interval `μ - |c-μ| < x < μ + |c-μ|`.
    ///
    /// Computed as `1 - 2p` where `p` is the upper-tail probability beyond
    /// the reflected cut-off `μ + |c-μ|`, so `c` and `2μ - c` give
    /// identical results.
    pub fn symmetric_interval_probability(&self, c: Real, settings: &Settings) -> Result<Real> {
        let (_, upper) = self.symmetric_interval(c);
        Ok(1.0 - 2.0 * self.probability(upper, Tail::Upper, settings)?)
    }

    /// Bounds `(μ - |c-μ|, μ + |c-μ|)` of the symmetric interval around `c`.
    pub fn symmetric_interval(&self, c: Real) -> (Real, Real) {
        let half_width = (c - self.mean).abs();
        (self.mean - half_width, self.mean + half_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pdf_at_mean() {
        let expected = 1.0 / (2.0 * PI).sqrt();
        assert_abs_diff_eq!(gaussian_pdf(0.0, 0.0, 1.0), expected, epsilon = 1e-15);
        assert_abs_diff_eq!(
            Gaussian::new(3.0, 2.0).unwrap().pdf(3.0),
            expected / 2.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn pdf_is_symmetric() {
        let g = Gaussian::new(-1.0, 0.5).unwrap();
        assert_abs_diff_eq!(g.pdf(-1.7), g.pdf(-0.3), epsilon = 1e-15);
    }

    #[test]
    fn zero_stdev_is_division_by_zero() {
        assert!(matches!(
            Gaussian::new(0.0, 0.0),
            Err(Error::DivisionByZero(_))
        ));
        assert!(!gaussian_pdf(0.0, 0.0, 0.0).is_finite());
    }

    #[test]
    fn negative_stdev_rejected() {
        assert!(matches!(
            Gaussian::new(0.0, -1.0),
            Err(Error::Precondition(_))
        ));
        assert!(Gaussian::new(0.0, Real::NAN).is_err());
        assert!(Gaussian::new(Real::INFINITY, 1.0).is_err());
    }

    #[test]
    fn half_mass_below_mean() {
        let s = Settings::default();
        for (mu, sigma) in [(0.0, 1.0), (10.0, 2.0), (-3.0, 0.25)] {
            let g = Gaussian::new(mu, sigma).unwrap();
            let p = g.probability(mu, Tail::Lower, &s).unwrap();
            assert_abs_diff_eq!(p, 0.5, epsilon = 1e-4);
        }
    }

    #[test]
    fn upper_tail_at_mean() {
        let p = Gaussian::standard()
            .probability(0.0, Tail::Upper, &Settings::default())
            .unwrap();
        assert_abs_diff_eq!(p, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn tails_are_complementary() {
        let s = Settings::default();
        let g = Gaussian::new(2.0, 3.0).unwrap();
        let lo = g.probability(4.5, Tail::Lower, &s).unwrap();
        let hi = g.probability(4.5, Tail::Upper, &s).unwrap();
        assert_abs_diff_eq!(lo + hi, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn empirical_rule() {
        let s = Settings::default();
        let g = Gaussian::standard();
        assert_abs_diff_eq!(
            g.symmetric_interval_probability(1.0, &s).unwrap(),
            0.6827,
            epsilon = 2e-3
        );
        assert_abs_diff_eq!(
            g.symmetric_interval_probability(2.0, &s).unwrap(),
            0.9545,
            epsilon = 2e-3
        );
        assert_abs_diff_eq!(
            g.symmetric_interval_probability(3.0, &s).unwrap(),
            0.9973,
            epsilon = 2e-3
        );
    }

    #[test]
    fn two_sided_from_upper_tail() {
        let s = Settings::default();
        let g = Gaussian::standard();
        let p = g.probability(1.0, Tail::Upper, &s).unwrap();
        assert_abs_diff_eq!(1.0 - 2.0 * p, 0.6827, epsilon = 2e-3);
    }

    #[test]
    fn symmetric_interval_mirror() {
        let s = Settings::default();
        let g = Gaussian::new(5.0, 2.0).unwrap();
        let right = g.symmetric_interval_probability(7.0, &s).unwrap();
        let left = g.symmetric_interval_probability(3.0, &s).unwrap();
        assert_eq!(right, left);
        assert_eq!(g.symmetric_interval(3.0), (3.0, 7.0));
    }

    #[test]
    fn more_intervals_do_not_hurt() {
        let s = Settings {
            simpson_intervals: 1000,
            ..Settings::default()
        };
        let p = Gaussian::standard()
            .probability(1.96, Tail::Lower, &s)
            .unwrap();
        assert_abs_diff_eq!(p, 0.975, epsilon = 1e-4);
    }
}
