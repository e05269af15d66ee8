//! Closed-form quadratic roots.

use crate::polynomial::{Multiplicity, Root};
use ec_core::Real;
#[cfg(feature = "serde")]
use serde::Serialize;

/// The double-root branch requires an exactly zero discriminant.
pub const DISCRIMINANT_ZERO: Real = 0.0;

/// Discriminant branch taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum QuadraticCase {
    TwoReal,
    DoubleRoot,
    ComplexPair,
}

/// Roots of `a x² + b x + c = 0`, `a != 0`.
///
/// Order: the `+√|Δ|/(2a)` member of each pair first.
pub fn solve_quadratic(a: Real, b: Real, c: Real) -> (QuadraticCase, Vec<Root>) {
    let discriminant = b * b - 4.0 * a * c;
    tracing::trace!(discriminant, "quadratic");

    if discriminant > DISCRIMINANT_ZERO {
        let sqrt_d = discriminant.sqrt();
        let x1 = (-b + sqrt_d) / (2.0 * a);
        let x2 = (-b - sqrt_d) / (2.0 * a);
        (QuadraticCase::TwoReal, vec![Root::simple(x1), Root::simple(x2)])
    } else if discriminant == DISCRIMINANT_ZERO {
        let x = -b / (2.0 * a);
        (
            QuadraticCase::DoubleRoot,
            vec![Root::repeated(x, Multiplicity::Double)],
        )
    } else {
        let re = -b / (2.0 * a);
        let im = discriminant.abs().sqrt() / (2.0 * a);
        (
            QuadraticCase::ComplexPair,
            vec![Root::Complex { re, im }, Root::Complex { re, im: -im }],
        )
    }
}
