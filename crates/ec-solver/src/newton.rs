//! Seeded Newton-Raphson real-root search for quartics and quintics.
//!
//! Each seed runs an independent, bounded iteration on the monic form of the
//! polynomial. Only converged seeds contribute roots. Complex roots are never
//! found, and a polynomial may report fewer real roots than it has.

use crate::polynomial::Polynomial;
use ec_core::Real;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Starting guesses, in run order.
pub const NEWTON_SEEDS: [Real; 11] = [
    -10.0, -5.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 5.0, 10.0,
];

/// Iteration budget per seed.
pub const NEWTON_MAX_ITERATIONS: usize = 100;

/// A seed converges once a step moves less than this.
pub const NEWTON_STEP_TOL: Real = 1e-10;

/// A seed is abandoned when `|f'(x)|` drops below this.
pub const NEWTON_DERIVATIVE_TOL: Real = 1e-10;

/// Two converged roots closer than this are the same root.
pub const ROOT_DEDUP_TOL: Real = 1e-10;

/// Newton search configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct NewtonConfig {
    /// Starting guesses
    pub seeds: Vec<Real>,
    /// Maximum iterations per seed
    pub max_iterations: usize,
    /// Step size below which a seed has converged
    pub step_tol: Real,
    /// Derivative magnitude below which a seed is abandoned
    pub derivative_tol: Real,
    /// Absolute distance under which two roots are merged
    pub dedup_tol: Real,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            seeds: NEWTON_SEEDS.to_vec(),
            max_iterations: NEWTON_MAX_ITERATIONS,
            step_tol: NEWTON_STEP_TOL,
            derivative_tol: NEWTON_DERIVATIVE_TOL,
            dedup_tol: ROOT_DEDUP_TOL,
        }
    }
}

/// Exit state of one seed run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeedOutcome {
    Converged { root: Real, iterations: usize },
    AbandonedDerivativeZero { at: Real, iterations: usize },
    ExhaustedIterations { last: Real },
}

/// Per-call tally of seed outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NewtonReport {
    /// Seeds that converged to a new root
    pub accepted: usize,
    /// Seeds that converged onto an already accepted root
    pub duplicates: usize,
    /// Seeds stopped at a near-zero derivative
    pub abandoned: usize,
    /// Seeds that used up the iteration budget
    pub exhausted: usize,
}

/// Iterate `x ← x - f(x)/f'(x)` from `seed` on `poly`.
pub fn run_seed(poly: &Polynomial, seed: Real, config: &NewtonConfig) -> SeedOutcome {
    let mut x = seed;
    for iter in 0..config.max_iterations {
        let fx = poly.eval(x);
        let dfx = poly.derivative_at(x);

        if dfx.abs() < config.derivative_tol {
            return SeedOutcome::AbandonedDerivativeZero {
                at: x,
                iterations: iter,
            };
        }

        let next = x - fx / dfx;
        if (next - x).abs() < config.step_tol {
            return SeedOutcome::Converged {
                root: next,
                iterations: iter + 1,
            };
        }
        x = next;
    }
    SeedOutcome::ExhaustedIterations { last: x }
}

/// Distinct real roots reached from the configured seeds, ascending.
pub fn find_real_roots(poly: &Polynomial, config: &NewtonConfig) -> (Vec<Real>, NewtonReport) {
    let monic = poly.normalized();
    let mut roots: Vec<Real> = Vec::new();
    let mut report = NewtonReport::default();

    for &seed in &config.seeds {
        let outcome = run_seed(&monic, seed, config);
        tracing::trace!(seed, ?outcome, "newton seed");
        match outcome {
            SeedOutcome::Converged { root, .. } => {
                if roots.iter().any(|r| (r - root).abs() < config.dedup_tol) {
                    report.duplicates += 1;
                } else {
                    roots.push(root);
                    report.accepted += 1;
                }
            }
            SeedOutcome::AbandonedDerivativeZero { .. } => report.abandoned += 1,
            SeedOutcome::ExhaustedIterations { .. } => report.exhausted += 1,
        }
    }

    roots.sort_by(|a, b| a.total_cmp(b));
    tracing::debug!(
        roots = roots.len(),
        duplicates = report.duplicates,
        abandoned = report.abandoned,
        exhausted = report.exhausted,
        "newton search finished"
    );
    (roots, report)
}
