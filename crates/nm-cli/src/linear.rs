//! Built-in linear systems: direct solves (Cholesky or Doolittle, whichever
//! fits) followed by a Gauss-Seidel solve of a diagonally dominant system.

use std::io::Write;

use nalgebra::{DMatrix, DVector};
use nm_core::{utilities::data_formatters::format_vector, Real, Settings};
use nm_math::linear_systems::{augment, gauss_seidel_with_settings, solve};

use crate::Result;

/// A square system `Ax = b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Coefficient matrix.
    pub a: DMatrix<Real>,
    /// Right-hand side.
    pub b: DVector<Real>,
}

impl Problem {
    fn new(n: usize, a: &[Real], b: &[Real]) -> Self {
        Self {
            a: DMatrix::from_row_slice(n, n, a),
            b: DVector::from_column_slice(b),
        }
    }
}

/// The two systems solved directly.
#[rustfmt::skip]
pub fn direct_problems() -> Vec<Problem> {
    vec![
        Problem::new(
            4,
            &[
                1.0, -1.0, 3.0, 2.0,
                -1.0, 5.0, -5.0, -2.0,
                3.0, -5.0, 19.0, 3.0,
                2.0, -2.0, 3.0, 21.0,
            ],
            &[15.0, -35.0, 94.0, 1.0],
        ),
        Problem::new(
            4,
            &[
                4.0, 2.0, 4.0, 0.0,
                2.0, 2.0, 3.0, 2.0,
                4.0, 3.0, 6.0, 3.0,
                0.0, 2.0, 3.0, 9.0,
            ],
            &[20.0, 36.0, 60.0, 122.0],
        ),
    ]
}

/// The system solved by Gauss-Seidel, given with its rows out of
/// diagonally dominant order.
#[rustfmt::skip]
pub fn iterative_problem() -> Problem {
    Problem::new(
        3,
        &[
            1.0, 4.0, 1.0,
            3.0, 1.0, -1.0,
            2.0, 1.0, 5.0,
        ],
        &[12.0, 2.0, 19.0],
    )
}

fn write_matrix<W: Write>(out: &mut W, a: &DMatrix<Real>) -> Result<()> {
    for row in a.row_iter() {
        let row: Vec<Real> = row.iter().copied().collect();
        writeln!(out, "{}", format_vector(&row, 1))?;
    }
    Ok(())
}

/// Print and solve every built-in problem.
pub fn run<W: Write>(out: &mut W, settings: &Settings) -> Result<()> {
    for (i, problem) in direct_problems().iter().enumerate() {
        writeln!(out, "\nProblem {}:", i + 1)?;
        writeln!(out, "Matrix A:")?;
        write_matrix(out, &problem.a)?;
        writeln!(out, "Vector b: {}", format_vector(problem.b.as_slice(), 1))?;
        let (method, x) = solve(&problem.a, &problem.b)?;
        writeln!(out, "Using {method} method...")?;
        writeln!(out, "Solution vector x: {}", format_vector(x.as_slice(), 3))?;
    }

    let problem = iterative_problem();
    let aug = augment(&problem.a, &problem.b)?;
    writeln!(out, "\nGauss-Seidel ({} sweeps):", settings.gauss_seidel_iterations)?;
    write_matrix(out, &aug)?;
    let x = gauss_seidel_with_settings(&aug, &DVector::zeros(problem.b.len()), settings)?;
    writeln!(out, "Solution vector x: {}", format_vector(x.as_slice(), 3))?;
    Ok(())
}
