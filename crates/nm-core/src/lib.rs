//! # nm-core
//!
//! Core types, error definitions, and settings for numethods.
//!
//! This crate provides the building blocks shared by the numeric core and the
//! interactive front-end: scalar type aliases, the error hierarchy with its
//! `ensure!` / `fail!` macros, the [`Settings`] value carrying the default
//! interval and iteration counts, and the text-input parsers used by the
//! prompting loops.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Default interval counts, iteration budgets and tolerances.
pub mod settings;

/// Text-input parsing and output formatting helpers.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Non-negative integer type (degrees of freedom and the like).
pub type Natural = u32;

/// Alias used for sizes, counts and indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
