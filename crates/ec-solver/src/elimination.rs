//! Gaussian elimination with partial pivoting for square systems.

use crate::linear::LinearSystem;
use ec_core::Real;
use nalgebra::{DMatrix, DVector};

/// Pivoted factorization is treated as singular when `|det|` falls below this.
pub const ELIMINATION_SINGULAR_TOL: Real = 1e-10;

/// Solve `A x = b` through an LU factorization, `None` when singular.
pub fn solve_by_elimination(system: &LinearSystem) -> Option<Vec<Real>> {
    let n = system.size().unknowns();
    let a = DMatrix::from_fn(n, n, |i, j| system.coefficient(i, j));
    let b = DVector::from_fn(n, |i, _| system.constant(i));

    let lu = a.lu();
    if lu.determinant().abs() < ELIMINATION_SINGULAR_TOL {
        return None;
    }

    let x = lu.solve(&b)?;
    Some(x.iter().copied().collect())
}
