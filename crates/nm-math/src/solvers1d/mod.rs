//! 1D root finding.

use nm_core::{
    errors::{checked_div, Result},
    settings::{DEFAULT_SECANT_MAX_ITERATIONS, DEFAULT_SECANT_TOLERANCE},
    Real, Settings, Size,
};
use tracing::{debug, trace, warn};

/// A root estimate and the number of iterations spent producing it.
///
/// Running out of iterations is not an error: callers that care about
/// convergence should compare `iterations` against the cap they passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEstimate {
    /// The most recent estimate of the root.
    pub root: Real,
    /// Number of secant updates performed.
    pub iterations: Size,
}

// ── Secant ────────────────────────────────────────────────────────────────────

/// Secant method for root finding.
///
/// Starting from the estimates `x0` and `x1`, repeatedly replaces the older
/// point with `x1 - f(x1)·(x1 - x0)/(f(x1) - f(x0))`. Stops after
/// `max_iterations` updates, or as soon as an update moves the estimate by no
/// more than `|xtol|`.
///
/// `f` may itself fail (for instance when it integrates a density); its
/// error is returned unchanged. Two estimates with exactly equal function
/// values make the update undefined and are reported as
/// [`nm_core::Error::DivisionByZero`].
///
/// ```
/// use nm_math::solvers1d::secant;
/// let r = secant(|x| Ok(x - 5.0), 0.0, 1.0, 10, 1e-5).unwrap();
/// assert!((r.root - 5.0).abs() < 1e-5);
/// assert!(r.iterations <= 10);
/// ```
pub fn secant<F>(
    mut f: F,
    x0: Real,
    x1: Real,
    max_iterations: Size,
    xtol: Real,
) -> Result<RootEstimate>
where
    F: FnMut(Real) -> Result<Real>,
{
    let tol = xtol.abs();
    let mut x0 = x0;
    let mut x1 = x1;
    let mut f0 = f(x0)?;
    let mut step = tol + 1.0;
    let mut iterations = 0;

    while iterations < max_iterations && step.abs() > tol {
        let f1 = f(x1)?;
        let x_new = x1 - f1 * checked_div(x1 - x0, f1 - f0, "Secant: f(x0) == f(x1)")?;
        step = x_new - x1;
        x0 = x1;
        f0 = f1;
        x1 = x_new;
        iterations += 1;
        trace!(iterations, x = x1, f = f1, step, "secant step");
    }

    if step.abs() > tol {
        warn!(
            iterations,
            root = x1,
            step,
            "Secant: tolerance not met within the iteration cap"
        );
    } else {
        debug!(iterations, root = x1, "Secant converged");
    }
    Ok(RootEstimate {
        root: x1,
        iterations,
    })
}

/// Secant method with the iteration cap and tolerance taken from `settings`.
pub fn secant_with_settings<F>(
    f: F,
    x0: Real,
    x1: Real,
    settings: &Settings,
) -> Result<RootEstimate>
where
    F: FnMut(Real) -> Result<Real>,
{
    secant(
        f,
        x0,
        x1,
        settings.secant_max_iterations,
        settings.secant_tolerance,
    )
}

/// Secant method with the default cap (10 iterations) and tolerance (1e-5).
pub fn secant_default<F>(f: F, x0: Real, x1: Real) -> Result<RootEstimate>
where
    F: FnMut(Real) -> Result<Real>,
{
    secant(
        f,
        x0,
        x1,
        DEFAULT_SECANT_MAX_ITERATIONS,
        DEFAULT_SECANT_TOLERANCE,
    )
}
