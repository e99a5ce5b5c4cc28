//! Parsers for free-text answers typed at a prompt.
//!
//! Every parser treats an empty (or all-whitespace) answer as "keep the
//! default" and returns `None` for text it cannot understand, leaving it to
//! the caller to ask again.

use crate::{Natural, Real};

/// Answers that count as "yes". Matching is case-insensitive; anything else is "no".
pub const YES_OPTIONS: [&str; 3] = ["y", "yes", "true"];

/// Parse a real number, falling back to `default` on empty input.
///
/// Returns `None` if the text is neither empty nor a finite number, so
/// `inf` and `NaN` are refused like any other non-number.
pub fn parse_real_or(s: &str, default: Real) -> Option<Real> {
    let s = s.trim();
    if s.is_empty() {
        return Some(default);
    }
    parse_finite(s)
}

/// Parse a finite real number. Empty text, `inf` and `NaN` give `None`.
pub fn parse_finite(s: &str) -> Option<Real> {
    s.trim().parse::<Real>().ok().filter(|v| v.is_finite())
}

/// Parse a non-negative integer, falling back to `default` on empty input.
pub fn parse_natural_or(s: &str, default: Natural) -> Option<Natural> {
    let s = s.trim();
    if s.is_empty() {
        return Some(default);
    }
    s.parse().ok()
}

/// Return `true` when the answer is one of [`YES_OPTIONS`].
pub fn is_yes(s: &str) -> bool {
    let s = s.trim().to_lowercase();
    YES_OPTIONS.contains(&s.as_str())
}

/// Parse a yes/no answer, falling back to `default` on empty input.
///
/// Any non-empty answer that is not a yes token is "no".
pub fn parse_yes_no_or(s: &str, default: bool) -> bool {
    if s.trim().is_empty() {
        default
    } else {
        is_yes(s)
    }
}
