//! # nm-math
//!
//! The numeric core of numethods: a fixed-step Simpson integrator, Gaussian
//! and Student's t densities with the probabilities built on top of them,
//! the Secant root finder, and Gauss-Seidel plus direct linear solves (over
//! nalgebra).
//!
//! Every routine is synchronous and bounded by a fixed number of samples or
//! iterations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Numerical integration.
pub mod integrals;

/// Linear systems: Gauss-Seidel, Cholesky, Doolittle.
pub mod linear_systems;

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{find_cutoff, gaussian_pdf, Coverage, Density, Gaussian, StudentT, Tail};
pub use integrals::{Integrator, SimpsonRule};
pub use linear_systems::{gauss_seidel, make_diagonally_dominant};
pub use solvers1d::{secant, RootEstimate};
