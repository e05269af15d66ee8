//! Field-level entry points for the two solvers.
//!
//! These turn raw text fields into solver inputs, apply the input rules for
//! each mode and hand back the solved problem next to its result.

use ec_core::Real;
use ec_solver::{
    Degree, LinearConfig, LinearSolution, LinearSystem, NewtonConfig, Polynomial, RootSet,
    SystemSize, solve_linear_with_config,
};

use crate::error::{AppError, AppResult, LINEAR_INPUT_ERROR};
use crate::parse::{parse_coefficient, parse_field, split_row};

/// A solved linear system.
#[derive(Debug, Clone)]
pub struct LinearOutcome {
    pub system: LinearSystem,
    pub solution: LinearSolution,
}

impl LinearOutcome {
    /// Substitution residuals, when a unique solution exists.
    pub fn residuals(&self) -> Option<Vec<Real>> {
        self.solution
            .values()
            .map(|values| self.system.residuals(&values))
    }
}

/// A solved polynomial.
#[derive(Debug, Clone)]
pub struct PolynomialOutcome {
    pub polynomial: Polynomial,
    pub roots: RootSet,
}

impl PolynomialOutcome {
    /// `(root, f(root))` for every real root.
    pub fn residuals(&self) -> Vec<(Real, Real)> {
        self.roots
            .real_values()
            .into_iter()
            .map(|x| (x, self.polynomial.eval(x)))
            .collect()
    }
}

/// Solve a system given as `rows[i][j]` text fields.
pub fn solve_linear_fields(
    size: SystemSize,
    rows: &[Vec<String>],
    config: &LinearConfig,
) -> AppResult<LinearOutcome> {
    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        let parsed = row
            .iter()
            .map(|field| parse_field(field).filter(|v| v.is_finite()))
            .collect::<Option<Vec<Real>>>()
            .ok_or_else(|| AppError::InvalidInput(LINEAR_INPUT_ERROR.to_string()))?;
        values.push(parsed);
    }

    let system = LinearSystem::with_size(size, values)?;
    let solution = solve_linear_with_config(&system, config);
    tracing::debug!(unknowns = size.unknowns(), ?solution, "solved linear system");
    Ok(LinearOutcome { system, solution })
}

/// Solve a system given as comma-separated rows; the size is the row count.
pub fn solve_linear_rows(rows: &[String], config: &LinearConfig) -> AppResult<LinearOutcome> {
    let size = SystemSize::try_from(rows.len())?;
    let fields: Vec<Vec<String>> = rows.iter().map(|r| split_row(r)).collect();
    solve_linear_fields(size, &fields, config)
}

/// Solve a polynomial given as coefficient text fields, highest degree first.
pub fn solve_polynomial_fields(
    degree: Degree,
    fields: &[String],
    config: &NewtonConfig,
) -> AppResult<PolynomialOutcome> {
    let coefficients: Vec<Real> = fields.iter().map(|f| parse_coefficient(f)).collect();
    let polynomial = Polynomial::with_degree(degree, coefficients)?;
    let roots = polynomial.roots_with(config);
    tracing::debug!(degree = degree.value(), roots = roots.len(), "solved polynomial");
    Ok(PolynomialOutcome { polynomial, roots })
}
