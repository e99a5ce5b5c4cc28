//! Error types for numethods.
//!
//! A single `thiserror`-derived enum covers every failure the numeric core
//! can report. Preconditions and hard failures go through the `ensure!` and
//! `fail!` convenience macros defined here.
//!
//! Floating-point division by zero does not trap in Rust, it silently yields
//! `inf` or `NaN`. Every place where the numeric methods divide by a
//! caller-controlled quantity checks for an exact zero first and returns
//! [`Error::DivisionByZero`] instead.

use thiserror::Error;

/// The top-level error type used throughout numethods.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument: wrong shape, unsupported parameter count, empty range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric method hit an exact zero divisor.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout numethods.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use nm_core::{ensure, errors::Error};
/// fn positive(x: f64) -> nm_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use nm_core::{fail, errors::Error};
/// fn always_err() -> nm_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

/// Divide `numerator` by `denominator`, or return
/// `Err(Error::DivisionByZero(...))` when the denominator is exactly zero.
///
/// `context` names the quantity being divided by and ends up in the message.
///
/// # Example
/// ```
/// use nm_core::errors::{checked_div, Error};
/// assert_eq!(checked_div(6.0, 3.0, "pivot").unwrap(), 2.0);
/// assert!(matches!(checked_div(1.0, 0.0, "pivot"), Err(Error::DivisionByZero(_))));
/// ```
#[inline]
pub fn checked_div(numerator: f64, denominator: f64, context: &str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(Error::DivisionByZero(context.to_owned()));
    }
    Ok(numerator / denominator)
}
