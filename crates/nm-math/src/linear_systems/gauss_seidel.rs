//! Gauss-Seidel iteration.

use nalgebra::{DMatrix, DVector};
use nm_core::{
    errors::{Error, Result},
    Real, Settings, Size,
};
use tracing::{debug, trace};

use super::{check_augmented, make_diagonally_dominant};

/// Solve `Ax = b` by Gauss-Seidel iteration on the augmented matrix `[A|b]`.
///
/// The rows are first reordered with [`make_diagonally_dominant`]. Each of
/// the `iterations` sweeps then updates `x[i]` in row order, in place, so
/// later rows already see the new values of earlier unknowns. The sweep
/// count is fixed: there is no convergence test and no early exit.
///
/// A zero on the diagonal after reordering is reported as
/// [`Error::DivisionByZero`] before any sweep runs.
///
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use nm_math::linear_systems::gauss_seidel;
/// // 4x + y = 9, x + 3y = 5  →  x = 2, y = 1
/// let aug = DMatrix::from_row_slice(2, 3, &[4.0, 1.0, 9.0, 1.0, 3.0, 5.0]);
/// let x = gauss_seidel(&aug, &DVector::zeros(2), 15).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-6 && (x[1] - 1.0).abs() < 1e-6);
/// ```
pub fn gauss_seidel(
    aug: &DMatrix<Real>,
    initial: &DVector<Real>,
    iterations: Size,
) -> Result<DVector<Real>> {
    let n = check_augmented(aug)?;
    if initial.len() != n {
        return Err(Error::InvalidArgument(format!(
            "initial guess has {} entries, system has {n} unknowns",
            initial.len()
        )));
    }
    let a = make_diagonally_dominant(aug)?;
    if let Some(i) = (0..n).find(|&i| a[(i, i)] == 0.0) {
        return Err(Error::DivisionByZero(format!(
            "Gauss-Seidel diagonal entry a[{i}][{i}] is zero"
        )));
    }
    let mut x = initial.clone();

    for sweep in 0..iterations {
        for i in 0..n {
            let mut rhs = a[(i, n)];
            for k in (0..n).filter(|&k| k != i) {
                rhs -= a[(i, k)] * x[k];
            }
            x[i] = rhs / a[(i, i)];
        }
        trace!(sweep, x = ?x.as_slice(), "Gauss-Seidel sweep");
    }
    debug!(iterations, x = ?x.as_slice(), "Gauss-Seidel done");
    Ok(x)
}

/// Gauss-Seidel with the sweep count taken from `settings`.
pub fn gauss_seidel_with_settings(
    aug: &DMatrix<Real>,
    initial: &DVector<Real>,
    settings: &Settings,
) -> Result<DVector<Real>> {
    gauss_seidel(aug, initial, settings.gauss_seidel_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn two_by_two() {
        // 10x - y = 9, -x + 10y = 19  →  x = 109/99, y = 199/99
        let aug = DMatrix::from_row_slice(2, 3, &[10.0, -1.0, 9.0, -1.0, 10.0, 19.0]);
        let x = gauss_seidel_with_settings(&aug, &DVector::zeros(2), &Settings::default()).unwrap();
        assert_abs_diff_eq!(x[0], 109.0 / 99.0, epsilon = 1e-3);
        assert_abs_diff_eq!(x[1], 199.0 / 99.0, epsilon = 1e-3);
    }

    #[test]
    fn rows_out_of_order() {
        // Same system as above with the rows swapped.
        let aug = DMatrix::from_row_slice(2, 3, &[-1.0, 10.0, 19.0, 10.0, -1.0, 9.0]);
        let x = gauss_seidel(&aug, &DVector::zeros(2), 15).unwrap();
        assert_abs_diff_eq!(x[0], 109.0 / 99.0, epsilon = 1e-3);
        assert_abs_diff_eq!(x[1], 199.0 / 99.0, epsilon = 1e-3);
    }

    #[test]
    fn three_by_three() {
        #[rustfmt::skip]
        let aug = DMatrix::from_row_slice(3, 4, &[
            3.0, 1.0, -1.0, 2.0,
            1.0, 4.0, 1.0, 12.0,
            2.0, 1.0, 2.0, 10.0,
        ]);
        let x = gauss_seidel(&aug, &DVector::zeros(3), 15).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(x[2], 3.0, epsilon = 1e-3);
    }

    #[test]
    fn zero_sweeps_returns_guess() {
        let aug = DMatrix::from_row_slice(2, 3, &[4.0, 1.0, 9.0, 1.0, 3.0, 5.0]);
        let guess = DVector::from_vec(vec![0.5, -0.5]);
        assert_eq!(gauss_seidel(&aug, &guess, 0).unwrap(), guess);
    }

    #[test]
    fn single_sweep_uses_updated_values() {
        // Row 0: x0 = (9 - 1*0)/4 = 2.25; row 1 sees the new x0: (5 - 2.25)/3.
        let aug = DMatrix::from_row_slice(2, 3, &[4.0, 1.0, 9.0, 1.0, 3.0, 5.0]);
        let x = gauss_seidel(&aug, &DVector::zeros(2), 1).unwrap();
        assert_abs_diff_eq!(x[0], 2.25, epsilon = 1e-15);
        assert_abs_diff_eq!(x[1], 2.75 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn zero_diagonal_is_division_by_zero() {
        let aug = DMatrix::from_row_slice(2, 3, &[0.0, 1.0, 1.0, 0.0, 2.0, 2.0]);
        assert!(matches!(
            gauss_seidel(&aug, &DVector::zeros(2), 15),
            Err(Error::DivisionByZero(_))
        ));
        assert!(matches!(
            gauss_seidel(&aug, &DVector::zeros(2), 0),
            Err(Error::DivisionByZero(_))
        ));
    }

    #[test]
    fn shape_errors() {
        let aug = DMatrix::from_row_slice(2, 3, &[4.0, 1.0, 9.0, 1.0, 3.0, 5.0]);
        assert!(matches!(
            gauss_seidel(&aug, &DVector::zeros(3), 15),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            gauss_seidel(&DMatrix::zeros(2, 2), &DVector::zeros(2), 15),
            Err(Error::InvalidArgument(_))
        ));
    }
}
