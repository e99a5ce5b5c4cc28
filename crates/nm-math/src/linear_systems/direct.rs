//! Direct solves: Cholesky for symmetric positive-definite systems,
//! Doolittle LU for everything else.

use std::fmt;

use nalgebra::{DMatrix, DVector};
use nm_core::{
    errors::{checked_div, Result},
    fail, Real,
};
use tracing::debug;

use super::{
    backward_substitution, check_square, forward_substitution, is_positive_definite, is_symmetric,
};

/// Which factorisation [`solve`] used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectMethod {
    /// `A = L·Lᵀ`.
    Cholesky,
    /// `A = L·U` with unit-diagonal `L`.
    Doolittle,
}

impl fmt::Display for DirectMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectMethod::Cholesky => f.write_str("Cholesky"),
            DirectMethod::Doolittle => f.write_str("Doolittle"),
        }
    }
}

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// Returns the lower-triangular factor `L` such that `A = L·Lᵀ`.
pub fn cholesky_decomposition(a: &DMatrix<Real>) -> Result<DMatrix<Real>> {
    check_square(a)?;
    let Some(chol) = a.clone().cholesky() else {
        fail!("Cholesky decomposition failed: matrix is not positive-definite");
    };
    Ok(chol.l())
}

/// Solve `Ax = b` through `A = L·Lᵀ`: forward substitution for `Ly = b`,
/// then back substitution for `Lᵀx = y`.
pub fn cholesky_solve(a: &DMatrix<Real>, b: &DVector<Real>) -> Result<DVector<Real>> {
    let l = cholesky_decomposition(a)?;
    let y = forward_substitution(&l, b)?;
    backward_substitution(&l.transpose(), &y)
}

/// Doolittle LU decomposition without pivoting.
///
/// Returns `(L, U)` with `L` unit lower-triangular and `U` upper-triangular
/// such that `A = L·U`. A zero pivot on the diagonal of `U` is reported as
/// [`nm_core::Error::DivisionByZero`].
pub fn doolittle_decomposition(a: &DMatrix<Real>) -> Result<(DMatrix<Real>, DMatrix<Real>)> {
    let n = check_square(a)?;
    let mut l = DMatrix::<Real>::identity(n, n);
    let mut u = DMatrix::<Real>::zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let s: Real = (0..i).map(|k| l[(i, k)] * u[(k, j)]).sum();
            u[(i, j)] = a[(i, j)] - s;
        }
        for j in i + 1..n {
            let s: Real = (0..i).map(|k| l[(j, k)] * u[(k, i)]).sum();
            l[(j, i)] = checked_div(a[(j, i)] - s, u[(i, i)], &format!("zero pivot U[{i}][{i}]"))?;
        }
    }
    Ok((l, u))
}

/// Solve `Ax = b` through the Doolittle factors of `A`.
pub fn doolittle_solve(a: &DMatrix<Real>, b: &DVector<Real>) -> Result<DVector<Real>> {
    let (l, u) = doolittle_decomposition(a)?;
    let y = forward_substitution(&l, b)?;
    backward_substitution(&u, &y)
}

/// Solve `Ax = b`, using Cholesky when `A` is symmetric positive-definite and
/// Doolittle otherwise.
pub fn solve(a: &DMatrix<Real>, b: &DVector<Real>) -> Result<(DirectMethod, DVector<Real>)> {
    let method = if is_symmetric(a) && is_positive_definite(a) {
        DirectMethod::Cholesky
    } else {
        DirectMethod::Doolittle
    };
    debug!(%method, n = a.nrows(), "direct solve");
    let x = match method {
        DirectMethod::Cholesky => cholesky_solve(a, b)?,
        DirectMethod::Doolittle => doolittle_solve(a, b)?,
    };
    Ok((method, x))
}
