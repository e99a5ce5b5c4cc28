//! Probability distributions.
//!
//! Provides the Gaussian and Student's t densities, the [`Density`] family tag
//! the Simpson integrator samples, one-sided and symmetric-interval Gaussian
//! probabilities, the Student's t CDF, and the inversion of a Gaussian
//! probability back to its cut-off value.

pub mod cutoff;
pub mod normal;
pub mod student_t;

use std::fmt;

use nm_core::{
    ensure,
    errors::{Error, Result},
    Natural, Real,
};

pub use cutoff::{find_cutoff, Coverage, CutoffObjective};
pub use normal::{gaussian_pdf, Gaussian};
pub use student_t::{student_t_pdf, StudentT};

/// The natural logarithm of the Gamma function: ln Γ(z).
pub fn log_gamma(z: Real) -> Real {
    statrs::function::gamma::ln_gamma(z)
}

// ── Tail ──────────────────────────────────────────────────────────────────────

/// Which side of a cut-off value a one-sided probability refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tail {
    /// `P(x > c)`.
    Upper,
    /// `P(x < c)`.
    Lower,
}

impl Tail {
    /// `Upper` for `true`, `Lower` for `false`.
    pub fn from_greater_than(greater_than: bool) -> Self {
        if greater_than {
            Tail::Upper
        } else {
            Tail::Lower
        }
    }

    /// Comparison symbol used when printing `P(x > c)` / `P(x < c)`.
    pub fn symbol(self) -> &'static str {
        match self {
            Tail::Upper => ">",
            Tail::Lower => "<",
        }
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ── Density ───────────────────────────────────────────────────────────────────

/// A density function together with its distribution parameters.
///
/// The family is explicit, so the integrator never has to guess the
/// parameter layout from the number of arguments it was handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    /// Gaussian with a mean and a standard deviation.
    Gaussian(Gaussian),
    /// Student's t with integer degrees of freedom.
    StudentT(StudentT),
}

impl Density {
    /// Build a density from a flat parameter list.
    ///
    /// Two parameters are read as `(mean, stdev)` of a Gaussian, one as the
    /// degrees of freedom of a Student's t. Any other count is rejected.
    ///
    /// ```
    /// use nm_math::distributions::Density;
    /// assert!(matches!(Density::from_params(&[0.0, 1.0]), Ok(Density::Gaussian(_))));
    /// assert!(matches!(Density::from_params(&[7.0]), Ok(Density::StudentT(_))));
    /// assert!(Density::from_params(&[0.0, 1.0, 2.0]).is_err());
    /// ```
    pub fn from_params(params: &[Real]) -> Result<Self> {
        match *params {
            [mean, stdev] => Ok(Density::Gaussian(Gaussian::new(mean, stdev)?)),
            [df] => {
                ensure!(
                    df.is_finite() && df.fract() == 0.0 && df >= 1.0 && df <= Natural::MAX as Real,
                    "degrees of freedom must be a positive integer, got {df}"
                );
                Ok(Density::StudentT(StudentT::new(df as Natural)?))
            }
            _ => Err(Error::InvalidArgument(format!(
                "expected 1 (Student's t) or 2 (Gaussian) distribution parameters, got {}",
                params.len()
            ))),
        }
    }

    /// Evaluate the density at `x`.
    #[inline]
    pub fn pdf(&self, x: Real) -> Real {
        match self {
            Density::Gaussian(g) => g.pdf(x),
            Density::StudentT(t) => t.pdf(x),
        }
    }
}

impl From<Gaussian> for Density {
    fn from(g: Gaussian) -> Self {
        Density::Gaussian(g)
    }
}

impl From<StudentT> for Density {
    fn from(t: StudentT) -> Self {
        Density::StudentT(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_params_dispatches_on_arity() {
        match Density::from_params(&[3.0, 2.0]).unwrap() {
            Density::Gaussian(g) => {
                assert_eq!(g.mean(), 3.0);
                assert_eq!(g.stdev(), 2.0);
            }
            other => panic!("expected Gaussian, got {other:?}"),
        }
        match Density::from_params(&[11.0]).unwrap() {
            Density::StudentT(t) => assert_eq!(t.df(), 11),
            other => panic!("expected StudentT, got {other:?}"),
        }
    }

    #[test]
    fn from_params_rejects_other_arities() {
        for params in [&[][..], &[1.0, 2.0, 3.0][..], &[0.0, 1.0, -5.0, 5.0][..]] {
            assert!(matches!(
                Density::from_params(params),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn from_params_rejects_fractional_df() {
        assert!(matches!(
            Density::from_params(&[2.5]),
            Err(Error::Precondition(_))
        ));
        assert!(Density::from_params(&[0.0]).is_err());
    }

    #[test]
    fn pdf_forwards_to_family() {
        let g = Gaussian::new(1.0, 2.0).unwrap();
        let t = StudentT::new(5).unwrap();
        assert_eq!(Density::from(g).pdf(0.3), g.pdf(0.3));
        assert_eq!(Density::from(t).pdf(0.3), t.pdf(0.3));
    }

    #[test]
    fn log_gamma_values() {
        assert_abs_diff_eq!(log_gamma(5.0), 24.0_f64.ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(log_gamma(0.5), 0.5 * std::f64::consts::PI.ln(), epsilon = 1e-12);
    }

    #[test]
    fn tail_symbols() {
        assert_eq!(Tail::from_greater_than(true), Tail::Upper);
        assert_eq!(Tail::Lower.to_string(), "<");
        assert_eq!(Tail::Upper.symbol(), ">");
    }
}
