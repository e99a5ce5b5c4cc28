//! Linear systems `Ax = b`.
//!
//! Iterative solves use Gauss-Seidel on the augmented matrix `[A|b]` after a
//! row reordering towards diagonal dominance. Direct solves pick Cholesky for
//! symmetric positive-definite `A` and Doolittle LU otherwise.
//!
//! Matrices are plain `nalgebra::DMatrix<f64>` values.

pub mod direct;
pub mod gauss_seidel;

use nalgebra::{DMatrix, DVector};
use nm_core::{
    errors::{checked_div, Error, Result},
    Real,
};
use tracing::debug;

pub use direct::{
    cholesky_decomposition, cholesky_solve, doolittle_decomposition, doolittle_solve, solve,
    DirectMethod,
};
pub use gauss_seidel::{gauss_seidel, gauss_seidel_with_settings};

/// Build the augmented matrix `[A|b]`.
pub fn augment(a: &DMatrix<Real>, b: &DVector<Real>) -> Result<DMatrix<Real>> {
    if a.nrows() != b.len() {
        return Err(Error::InvalidArgument(format!(
            "A has {} rows but b has {} entries",
            a.nrows(),
            b.len()
        )));
    }
    let m = a.ncols();
    Ok(DMatrix::from_fn(a.nrows(), m + 1, |i, j| {
        if j < m {
            a[(i, j)]
        } else {
            b[i]
        }
    }))
}

/// Check that `aug` is an `n × (n+1)` augmented matrix with `n ≥ 1`.
pub(crate) fn check_augmented(aug: &DMatrix<Real>) -> Result<usize> {
    let n = aug.nrows();
    if n == 0 || aug.ncols() != n + 1 {
        return Err(Error::InvalidArgument(format!(
            "expected an n × (n+1) augmented matrix, got {} × {}",
            aug.nrows(),
            aug.ncols()
        )));
    }
    Ok(n)
}

fn check_square(a: &DMatrix<Real>) -> Result<usize> {
    if !a.is_square() || a.nrows() == 0 {
        return Err(Error::InvalidArgument(format!(
            "matrix must be square and non-empty, got {} × {}",
            a.nrows(),
            a.ncols()
        )));
    }
    Ok(a.nrows())
}

/// `true` if every diagonal entry strictly exceeds, in magnitude, the sum of
/// the magnitudes of the other coefficients in its row.
///
/// Only the first `nrows` columns are looked at, so an augmented matrix can
/// be passed directly.
pub fn is_diagonally_dominant(a: &DMatrix<Real>) -> bool {
    let n = a.nrows();
    if a.ncols() < n {
        return false;
    }
    (0..n).all(|i| {
        let off: Real = (0..n).filter(|&k| k != i).map(|k| a[(i, k)].abs()).sum();
        a[(i, i)].abs() > off
    })
}

/// Reorder the rows of an augmented matrix towards diagonal dominance.
///
/// For each column `i` in turn, the row (among rows `i..n`) with the
/// largest magnitude in column `i` is swapped into position `i`. Rows are
/// moved whole, right-hand side included, so the system is unchanged.
pub fn make_diagonally_dominant(aug: &DMatrix<Real>) -> Result<DMatrix<Real>> {
    let n = check_augmented(aug)?;
    let mut out = aug.clone();
    for i in 0..n {
        let mut best = i;
        for r in i + 1..n {
            if out[(r, i)].abs() > out[(best, i)].abs() {
                best = r;
            }
        }
        if best != i {
            debug!(column = i, from = best, "swapping rows towards diagonal dominance");
            out.swap_rows(i, best);
        }
    }
    Ok(out)
}

/// `true` if `a` is square and exactly equal to its transpose.
pub fn is_symmetric(a: &DMatrix<Real>) -> bool {
    if !a.is_square() {
        return false;
    }
    let n = a.nrows();
    (0..n).all(|i| (i + 1..n).all(|j| a[(i, j)] == a[(j, i)]))
}

/// `true` if every leading principal minor of `a` is positive.
///
/// Together with [`is_symmetric`] this is Sylvester's criterion for positive
/// definiteness.
pub fn is_positive_definite(a: &DMatrix<Real>) -> bool {
    if !a.is_square() || a.nrows() == 0 {
        return false;
    }
    (1..=a.nrows()).all(|k| a.view((0, 0), (k, k)).clone_owned().determinant() > 0.0)
}

/// Solve `Ly = b` for lower-triangular `L`.
pub fn forward_substitution(l: &DMatrix<Real>, b: &DVector<Real>) -> Result<DVector<Real>> {
    let n = check_square(l)?;
    if b.len() != n {
        return Err(Error::InvalidArgument(format!(
            "L is {n} × {n} but b has {} entries",
            b.len()
        )));
    }
    let mut y = DVector::zeros(n);
    for i in 0..n {
        let s: Real = (0..i).map(|j| l[(i, j)] * y[j]).sum();
        y[i] = checked_div(b[i] - s, l[(i, i)], &format!("zero pivot L[{i}][{i}]"))?;
    }
    Ok(y)
}

/// Solve `Ux = y` for upper-triangular `U`.
pub fn backward_substitution(u: &DMatrix<Real>, y: &DVector<Real>) -> Result<DVector<Real>> {
    let n = check_square(u)?;
    if y.len() != n {
        return Err(Error::InvalidArgument(format!(
            "U is {n} × {n} but y has {} entries",
            y.len()
        )));
    }
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let s: Real = (i + 1..n).map(|j| u[(i, j)] * x[j]).sum();
        x[i] = checked_div(y[i] - s, u[(i, i)], &format!("zero pivot U[{i}][{i}]"))?;
    }
    Ok(x)
}
