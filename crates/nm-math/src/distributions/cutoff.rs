//! Inverting a Gaussian probability: find the cut-off `c` that yields a
//! target probability.

use nm_core::{ensure, errors::Result, Real, Settings};

use super::{Gaussian, Tail};
use crate::solvers1d::{secant_with_settings, RootEstimate};

/// Which probability a cut-off refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// `P(x > c)` or `P(x < c)`.
    OneSided(Tail),
    /// `P(μ - |c-μ| < x < μ + |c-μ|)`.
    TwoSided,
}

/// `c ↦ probability(c) - target`, the function whose root is the cut-off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffObjective<'a> {
    /// Distribution the probability is taken from.
    pub gaussian: Gaussian,
    /// One- or two-sided probability.
    pub coverage: Coverage,
    /// Probability the cut-off should produce.
    pub target: Real,
    /// Interval counts used by every probability evaluation.
    pub settings: &'a Settings,
}

impl CutoffObjective<'_> {
    /// Probability at cut-off `c` for this objective's coverage.
    pub fn probability(&self, c: Real) -> Result<Real> {
        match self.coverage {
            Coverage::OneSided(tail) => self.gaussian.probability(c, tail, self.settings),
            Coverage::TwoSided => self.gaussian.symmetric_interval_probability(c, self.settings),
        }
    }

    /// `probability(c) - target`.
    pub fn value(&self, c: Real) -> Result<Real> {
        Ok(self.probability(c)? - self.target)
    }
}

/// Find the cut-off `c` whose probability equals `target`.
///
/// Runs the Secant method on [`CutoffObjective::value`] from the initial
/// guesses `μ` and `μ + σ`. The iteration count is returned alongside the
/// root.
///
/// ```
/// use nm_core::Settings;
/// use nm_math::distributions::{find_cutoff, Coverage, Gaussian, Tail};
/// let s = Settings::default();
/// let r = find_cutoff(Gaussian::standard(), Coverage::OneSided(Tail::Lower), 0.975, &s).unwrap();
/// assert!((r.root - 1.96).abs() < 1e-2);
/// ```
pub fn find_cutoff(
    gaussian: Gaussian,
    coverage: Coverage,
    target: Real,
    settings: &Settings,
) -> Result<RootEstimate> {
    ensure!(
        target > 0.0 && target < 1.0,
        "target probability must lie in (0, 1), got {target}"
    );
    let objective = CutoffObjective {
        gaussian,
        coverage,
        target,
        settings,
    };
    let c0 = gaussian.mean();
    let c1 = gaussian.mean() + gaussian.stdev();
    secant_with_settings(|c| objective.value(c), c0, c1, settings)
}
