//! Closed-form cubic roots via the depressed cubic `t³ + p t + q = 0`.
//!
//! Substituting `x = t - b/(3a)` removes the squared term. The sign of
//! `Δ = q²/4 + p³/27` selects the branch: Cardano's radicals when `Δ > 0`,
//! the trigonometric form when `Δ < 0`, and repeated roots when `Δ ≈ 0`.

use crate::polynomial::{Multiplicity, Root};
use ec_core::Real;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::f64::consts::PI;

/// `Δ` and `p` are treated as zero below this magnitude.
pub const CUBIC_BRANCH_TOL: Real = 1e-10;

/// Branch taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum CubicCase {
    TripleRoot,
    SimpleAndDouble,
    OneRealTwoComplex,
    ThreeReal,
}

/// Depressed-cubic parameters `(p, q, Δ)` of `a x³ + b x² + c x + d`.
pub fn depressed(a: Real, b: Real, c: Real, d: Real) -> (Real, Real, Real) {
    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);
    let delta = q * q / 4.0 + p * p * p / 27.0;
    (p, q, delta)
}

/// Roots of `a x³ + b x² + c x + d = 0`, `a != 0`, in derivation order.
pub fn solve_cubic(a: Real, b: Real, c: Real, d: Real) -> (CubicCase, Vec<Root>) {
    let (p, q, delta) = depressed(a, b, c, d);
    let shift = b / (3.0 * a);
    tracing::trace!(p, q, delta, "depressed cubic");

    if delta.abs() < CUBIC_BRANCH_TOL {
        if p.abs() < CUBIC_BRANCH_TOL {
            let x = -b / (3.0 * a);
            return (
                CubicCase::TripleRoot,
                vec![Root::repeated(x, Multiplicity::Triple)],
            );
        }
        let u = (-q / 2.0).cbrt();
        let x1 = 2.0 * u - shift;
        let x2 = -u - shift;
        return (
            CubicCase::SimpleAndDouble,
            vec![Root::simple(x1), Root::repeated(x2, Multiplicity::Double)],
        );
    }

    if delta > 0.0 {
        let sqrt_delta = delta.sqrt();
        let u = (-q / 2.0 + sqrt_delta).cbrt();
        let v = (-q / 2.0 - sqrt_delta).cbrt();

        let x1 = u + v - shift;
        let re = -(u + v) / 2.0 - shift;
        let im = 3.0_f64.sqrt() / 2.0 * (u - v);
        return (
            CubicCase::OneRealTwoComplex,
            vec![
                Root::simple(x1),
                Root::Complex { re, im },
                Root::Complex { re, im: -im },
            ],
        );
    }

    // Δ < 0 forces p < 0, so both square roots are real. Rounding can push
    // the arccos argument a hair outside [-1, 1].
    let cos_arg = -q / (2.0 * (-(p / 3.0).powi(3)).sqrt());
    let phi = cos_arg.clamp(-1.0, 1.0).acos();
    let scale = 2.0 * (-p / 3.0).sqrt();
    let roots = (0..3)
        .map(|k| {
            let angle = (phi + 2.0 * PI * k as Real) / 3.0;
            Root::simple(scale * angle.cos() - shift)
        })
        .collect();
    (CubicCase::ThreeReal, roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Real, expected: Real) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn three_real_roots_follow_angle_sequence() {
        // (x-1)(x-2)(x-3): φ = π/2, so k = 0, 1, 2 give 3, 1, 2.
        let (case, roots) = solve_cubic(1.0, -6.0, 11.0, -6.0);
        assert_eq!(case, CubicCase::ThreeReal);
        let values: Vec<Real> = roots.iter().map(Root::real_part).collect();
        assert_close(values[0], 3.0);
        assert_close(values[1], 1.0);
        assert_close(values[2], 2.0);
    }

    #[test]
    fn triple_root() {
        let (case, roots) = solve_cubic(1.0, -3.0, 3.0, -1.0);
        assert_eq!(case, CubicCase::TripleRoot);
        assert_eq!(roots, vec![Root::repeated(1.0, Multiplicity::Triple)]);
    }

    #[test]
    fn simple_and_double_root() {
        // (x-1)^2 (x+2) = x^3 - 3x + 2
        let (case, roots) = solve_cubic(1.0, 0.0, -3.0, 2.0);
        assert_eq!(case, CubicCase::SimpleAndDouble);
        assert_eq!(
            roots,
            vec![
                Root::simple(-2.0),
                Root::repeated(1.0, Multiplicity::Double)
            ]
        );
    }

    #[test]
    fn one_real_two_complex() {
        // x^3 - 1 = 0
        let (case, roots) = solve_cubic(1.0, 0.0, 0.0, -1.0);
        assert_eq!(case, CubicCase::OneRealTwoComplex);
        assert_close(roots[0].real_part(), 1.0);
        assert_close(roots[1].real_part(), -0.5);
        assert_close(roots[1].imaginary_part(), 3.0_f64.sqrt() / 2.0);
        assert_close(roots[2].imaginary_part(), -(3.0_f64.sqrt()) / 2.0);
    }

    #[test]
    fn scaled_leading_coefficient() {
        // 2(x-1)(x-2)(x-3)
        let (case, roots) = solve_cubic(2.0, -12.0, 22.0, -12.0);
        assert_eq!(case, CubicCase::ThreeReal);
        let mut values: Vec<Real> = roots.iter().map(Root::real_part).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        assert_close(values[0], 1.0);
        assert_close(values[1], 2.0);
        assert_close(values[2], 3.0);
    }
}
