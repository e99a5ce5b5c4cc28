//! Output formatting helpers.

use crate::Real;

/// Format a real number with the given number of decimal places.
///
/// Values that round to zero print without a sign, so `-1e-12` shows as
/// `0.000` rather than `-0.000`.
pub fn format_real(value: Real, decimals: usize) -> String {
    let half_ulp = 0.5 * 10f64.powi(-(decimals as i32));
    let value = if value.abs() < half_ulp { 0.0 } else { value };
    format!("{:.prec$}", value, prec = decimals)
}

/// Format a vector as `[a, b, c]`, each entry rounded to `decimals` places.
pub fn format_vector(values: &[Real], decimals: usize) -> String {
    let parts: Vec<String> = values.iter().map(|&v| format_real(v, decimals)).collect();
    format!("[{}]", parts.join(", "))
}

/// `True` / `False`, the way the prompts show a boolean default.
pub fn format_flag(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(0.682_689, 3), "0.683");
        assert_eq!(format_real(-1.0, 2), "-1.00");
        assert_eq!(format_real(-1e-12, 3), "0.000");
        assert_eq!(format_real(-0.0, 1), "0.0");
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector(&[1.0, -2.0004, 3.14159], 3), "[1.000, -2.000, 3.142]");
        assert_eq!(format_vector(&[], 3), "[]");
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(format_flag(true), "True");
        assert_eq!(format_flag(false), "False");
    }
}
