//! Exercises the façade the way a downstream crate would.

use approx::assert_abs_diff_eq;
use nalgebra::{DMatrix, DVector};
use numethods::prelude::*;

#[test]
fn probability_then_cutoff() {
    let settings = Settings::default();
    let g = Gaussian::new(0.0, 1.0).unwrap();
    let p = g.probability(1.5, Tail::Lower, &settings).unwrap();
    let r = find_cutoff(g, Coverage::OneSided(Tail::Lower), p, &settings).unwrap();
    assert_abs_diff_eq!(r.root, 1.5, epsilon = 1e-3);
}

#[test]
fn density_from_flat_params() {
    let rule = SimpsonRule::default();
    let d = Density::from_params(&[2.0, 0.5]).unwrap();
    assert_abs_diff_eq!(rule.integrate_density(&d, -0.5, 2.0).unwrap(), 0.5, epsilon = 1e-4);
    assert!(matches!(
        Density::from_params(&[1.0, 2.0, 3.0]),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn gauss_seidel_two_by_two() {
    // 5x + 2y = 12, x + 4y = 6  →  x = 2, y = 1
    let aug = DMatrix::from_row_slice(2, 3, &[5.0, 2.0, 12.0, 1.0, 4.0, 6.0]);
    let x = gauss_seidel(&aug, &DVector::zeros(2), 15).unwrap();
    assert_abs_diff_eq!(x[0], 2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(x[1], 1.0, epsilon = 1e-3);
}
