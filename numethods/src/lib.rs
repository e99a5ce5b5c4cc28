//! # numethods
//!
//! Textbook numerical methods for probability queries and linear systems.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on `nm-core` / `nm-math` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use numethods::core::Settings;
//! use numethods::math::distributions::{Gaussian, Tail};
//!
//! let settings = Settings::default();
//! let p = Gaussian::standard().probability(1.0, Tail::Upper, &settings).unwrap();
//! assert!((1.0 - 2.0 * p - 0.6827).abs() < 2e-3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, errors, and settings.
pub use nm_core as core;

/// Integration, distributions, root finding, linear systems.
pub use nm_math as math;

/// Commonly used items in one import.
pub mod prelude {
    pub use nm_core::{Error, Real, Result, Settings};
    pub use nm_math::distributions::{
        find_cutoff, Coverage, CutoffObjective, Density, Gaussian, StudentT, Tail,
    };
    pub use nm_math::integrals::{Integrator, SimpsonRule};
    pub use nm_math::linear_systems::{gauss_seidel, make_diagonally_dominant, solve};
    pub use nm_math::solvers1d::{secant, RootEstimate};
}
