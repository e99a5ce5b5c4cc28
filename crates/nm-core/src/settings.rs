//! Run-time settings for the numeric methods.
//!
//! [`Settings`] bundles the interval counts, iteration budgets and tolerances
//! the methods fall back on when the caller does not pick its own. It is a
//! plain value passed by reference: there is no process-wide instance, so two
//! sessions with different settings never interfere.
//!
//! Settings can be loaded from JSON. Missing keys keep their defaults, so a
//! file containing only `{"simpson_intervals": 400}` is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::{Real, Size};

/// Default number of Simpson sub-intervals.
pub const DEFAULT_SIMPSON_INTERVALS: Size = 100;

/// Default number of Simpson sub-intervals for the Student's t CDF.
pub const DEFAULT_STUDENT_T_INTERVALS: Size = 1000;

/// Number of standard deviations below the mean treated as −∞.
pub const DEFAULT_LOWER_TAIL_SIGMAS: Real = 5.0;

/// Default Secant iteration cap.
pub const DEFAULT_SECANT_MAX_ITERATIONS: Size = 10;

/// Default Secant step tolerance.
pub const DEFAULT_SECANT_TOLERANCE: Real = 1e-5;

/// Default number of Gauss-Seidel sweeps.
pub const DEFAULT_GAUSS_SEIDEL_ITERATIONS: Size = 15;

/// Interval counts, iteration budgets and tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simpson sub-intervals for Gaussian probabilities.
    pub simpson_intervals: Size,
    /// Simpson sub-intervals for the Student's t CDF.
    pub student_t_intervals: Size,
    /// The Gaussian lower integration limit is `mean - lower_tail_sigmas * stdev`.
    pub lower_tail_sigmas: Real,
    /// Secant iteration cap.
    pub secant_max_iterations: Size,
    /// Secant step tolerance.
    pub secant_tolerance: Real,
    /// Gauss-Seidel sweeps.
    pub gauss_seidel_iterations: Size,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simpson_intervals: DEFAULT_SIMPSON_INTERVALS,
            student_t_intervals: DEFAULT_STUDENT_T_INTERVALS,
            lower_tail_sigmas: DEFAULT_LOWER_TAIL_SIGMAS,
            secant_max_iterations: DEFAULT_SECANT_MAX_ITERATIONS,
            secant_tolerance: DEFAULT_SECANT_TOLERANCE,
            gauss_seidel_iterations: DEFAULT_GAUSS_SEIDEL_ITERATIONS,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Check that every count is usable and every real is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if self.simpson_intervals == 0 || self.student_t_intervals == 0 {
            return Err(Error::Config("interval counts must be positive".into()));
        }
        if !(self.lower_tail_sigmas.is_finite() && self.lower_tail_sigmas > 0.0) {
            return Err(Error::Config(format!(
                "lower_tail_sigmas must be finite and positive, got {}",
                self.lower_tail_sigmas
            )));
        }
        if !(self.secant_tolerance.is_finite() && self.secant_tolerance > 0.0) {
            return Err(Error::Config(format!(
                "secant_tolerance must be finite and positive, got {}",
                self.secant_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.simpson_intervals, 100);
        assert_eq!(s.student_t_intervals, 1000);
        assert_eq!(s.secant_max_iterations, 10);
        assert_eq!(s.gauss_seidel_iterations, 15);
        approx::assert_abs_diff_eq!(s.secant_tolerance, 1e-5);
        approx::assert_abs_diff_eq!(s.lower_tail_sigmas, 5.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s = Settings::from_json_str(r#"{ "simpson_intervals": 400 }"#).unwrap();
        assert_eq!(s.simpson_intervals, 400);
        assert_eq!(s.student_t_intervals, DEFAULT_STUDENT_T_INTERVALS);
        assert_eq!(s.gauss_seidel_iterations, DEFAULT_GAUSS_SEIDEL_ITERATIONS);
    }

    #[test]
    fn rejects_zero_intervals() {
        let err = Settings::from_json_str(r#"{ "student_t_intervals": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json_str("{ simpson_intervals: "),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = Settings::from_json_file("/nonexistent/numethods.json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
