//! Linear systems in 2, 3 or 4 unknowns.
//!
//! A [`LinearSystem`] is a row-major coefficient matrix augmented with the
//! constants column, sized by [`SystemSize`]. The 2×2 case uses the direct
//! determinant formula, the 3×3 case uses Cramer's rule over cofactor
//! expansions, and the 4×4 case is unsupported unless the caller opts into
//! elimination through [`LinearConfig`].

use crate::elimination::solve_by_elimination;
use crate::error::{SolverError, SolverResult};
use ec_core::{Real, Tolerances, nearly_equal};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2×2 system is singular only when its determinant is exactly zero.
pub const TWO_VAR_SINGULAR_DET: Real = 0.0;

/// A 3×3 system is singular when `|det|` falls below this.
pub const THREE_VAR_SINGULAR_TOL: Real = 1e-10;

/// Reason carried by [`LinearSolution::Degenerate`].
pub const DEGENERATE_MESSAGE: &str = "no unique solution (determinant is zero)";

/// Reason reported for [`LinearSolution::Unsupported`].
pub const UNSUPPORTED_MESSAGE: &str = "4-variable system solver is not implemented yet";

/// Declared number of unknowns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SystemSize {
    Two,
    Three,
    Four,
}

impl SystemSize {
    pub fn unknowns(self) -> usize {
        match self {
            SystemSize::Two => 2,
            SystemSize::Three => 3,
            SystemSize::Four => 4,
        }
    }

    /// Variable names in column order.
    pub fn variables(self) -> &'static [&'static str] {
        match self {
            SystemSize::Two => &["x", "y"],
            SystemSize::Three => &["x", "y", "z"],
            SystemSize::Four => &["w", "x", "y", "z"],
        }
    }
}

impl TryFrom<usize> for SystemSize {
    type Error = SolverError;

    fn try_from(n: usize) -> SolverResult<Self> {
        match n {
            2 => Ok(SystemSize::Two),
            3 => Ok(SystemSize::Three),
            4 => Ok(SystemSize::Four),
            other => Err(SolverError::UnsupportedSystemSize(other)),
        }
    }
}

/// N equations of N coefficients plus one constant term each.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem {
    size: SystemSize,
    rows: Vec<Vec<Real>>,
}

impl LinearSystem {
    /// Build a system whose size is the number of equations given.
    pub fn new(rows: Vec<Vec<Real>>) -> SolverResult<Self> {
        let size = SystemSize::try_from(rows.len())?;
        Self::with_size(size, rows)
    }

    /// Build a system of a declared size, checking every row's shape.
    pub fn with_size(size: SystemSize, rows: Vec<Vec<Real>>) -> SolverResult<Self> {
        let n = size.unknowns();
        if rows.len() != n {
            return Err(SolverError::WrongArity {
                what: "equations",
                expected: n,
                got: rows.len(),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n + 1) {
            return Err(SolverError::WrongArity {
                what: "entries per equation",
                expected: n + 1,
                got: row.len(),
            });
        }
        Ok(Self { size, rows })
    }

    pub fn size(&self) -> SystemSize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Real>] {
        &self.rows
    }

    pub(crate) fn coefficient(&self, row: usize, col: usize) -> Real {
        self.rows[row][col]
    }

    pub(crate) fn constant(&self, row: usize) -> Real {
        self.rows[row][self.size.unknowns()]
    }

    /// Left-hand side of every equation after substituting `values`.
    pub fn evaluate(&self, values: &[Real]) -> Vec<Real> {
        let n = self.size.unknowns();
        self.rows
            .iter()
            .map(|row| row[..n].iter().zip(values).map(|(a, x)| a * x).sum::<Real>())
            .collect()
    }

    /// `lhs - rhs` for every equation after substituting `values`.
    pub fn residuals(&self, values: &[Real]) -> Vec<Real> {
        (0..self.rows.len())
            .zip(self.evaluate(values))
            .map(|(i, lhs)| lhs - self.constant(i))
            .collect()
    }

    /// Whether every equation holds for `values` within `tol`.
    pub fn is_satisfied_by(&self, values: &[Real], tol: Tolerances) -> bool {
        values.len() == self.size.unknowns()
            && self
                .evaluate(values)
                .into_iter()
                .enumerate()
                .all(|(i, lhs)| nearly_equal(lhs, self.constant(i), tol))
    }
}

/// One solved unknown.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VariableValue {
    pub name: &'static str,
    pub value: Real,
}

/// Outcome of a linear solve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum LinearSolution {
    /// Unique solution, in the system's variable order.
    Solution { values: Vec<VariableValue> },
    /// Singular system.
    Degenerate { message: &'static str },
    /// Recognized size that the active configuration does not solve.
    Unsupported { size: SystemSize },
}

impl LinearSolution {
    fn from_values(size: SystemSize, values: &[Real]) -> Self {
        LinearSolution::Solution {
            values: size
                .variables()
                .iter()
                .zip(values)
                .map(|(&name, &value)| VariableValue { name, value })
                .collect(),
        }
    }

    /// Raw values, when the system had a unique solution.
    pub fn values(&self) -> Option<Vec<Real>> {
        match self {
            LinearSolution::Solution { values } => Some(values.iter().map(|v| v.value).collect()),
            _ => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, LinearSolution::Degenerate { .. })
    }
}

/// How 4-variable systems are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FourVariablePolicy {
    /// Report [`LinearSolution::Unsupported`].
    #[default]
    Unsupported,
    /// Gaussian elimination with partial pivoting.
    Elimination,
}

/// Linear solver configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearConfig {
    pub four_variable: FourVariablePolicy,
}

/// Solve with the default configuration.
pub fn solve(system: &LinearSystem) -> LinearSolution {
    solve_with_config(system, &LinearConfig::default())
}

pub fn solve_with_config(system: &LinearSystem, config: &LinearConfig) -> LinearSolution {
    let size = system.size();
    let values = match size {
        SystemSize::Two => solve_2x2(system),
        SystemSize::Three => solve_3x3(system),
        SystemSize::Four => match config.four_variable {
            FourVariablePolicy::Unsupported => {
                tracing::debug!("4-variable system left unsolved");
                return LinearSolution::Unsupported { size };
            }
            FourVariablePolicy::Elimination => solve_by_elimination(system),
        },
    };

    match values {
        Some(values) => LinearSolution::from_values(size, &values),
        None => {
            tracing::debug!(unknowns = size.unknowns(), "singular linear system");
            LinearSolution::Degenerate {
                message: DEGENERATE_MESSAGE,
            }
        }
    }
}

fn solve_2x2(system: &LinearSystem) -> Option<Vec<Real>> {
    let r = system.rows();
    let (a1, b1, c1) = (r[0][0], r[0][1], r[0][2]);
    let (a2, b2, c2) = (r[1][0], r[1][1], r[1][2]);

    let determinant = a1 * b2 - a2 * b1;
    if determinant == TWO_VAR_SINGULAR_DET {
        return None;
    }

    let x = (c1 * b2 - c2 * b1) / determinant;
    let y = (a1 * c2 - a2 * c1) / determinant;
    Some(vec![x, y])
}

type Matrix3 = [[Real; 3]; 3];

/// Cofactor expansion along the first row.
fn det3(m: &Matrix3) -> Real {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

fn solve_3x3(system: &LinearSystem) -> Option<Vec<Real>> {
    let mut matrix: Matrix3 = [[0.0; 3]; 3];
    let mut constants = [0.0; 3];
    for (i, row) in system.rows().iter().enumerate() {
        matrix[i].copy_from_slice(&row[..3]);
        constants[i] = row[3];
    }

    let det = det3(&matrix);
    if det.abs() < THREE_VAR_SINGULAR_TOL {
        return None;
    }

    // Cramer: swap column j for the constants.
    let values = (0..3)
        .map(|j| {
            let mut replaced = matrix;
            for (row, c) in replaced.iter_mut().zip(constants) {
                row[j] = c;
            }
            det3(&replaced) / det
        })
        .collect();
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sys(rows: &[&[Real]]) -> LinearSystem {
        LinearSystem::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn two_by_two_unique() {
        let solution = solve(&sys(&[&[1.0, 1.0, 2.0], &[1.0, -1.0, 0.0]]));
        assert_eq!(solution.values(), Some(vec![1.0, 1.0]));
        if let LinearSolution::Solution { values } = solution {
            assert_eq!(values[0].name, "x");
            assert_eq!(values[1].name, "y");
        }
    }

    #[test]
    fn two_by_two_exactly_singular() {
        let solution = solve(&sys(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]]));
        assert_eq!(
            solution,
            LinearSolution::Degenerate {
                message: DEGENERATE_MESSAGE
            }
        );
    }

    #[test]
    fn two_by_two_tiny_determinant_still_solves() {
        // det = 1e-12: below the 3×3 tolerance, but 2×2 only rejects exact zero
        let system = sys(&[&[1.0, 1.0, 2.0], &[1.0, 1.0 + 1e-12, 2.0]]);
        assert!(!solve(&system).is_degenerate());
    }

    #[test]
    fn three_by_three_cramer() {
        // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27
        let system = sys(&[
            &[1.0, 1.0, 1.0, 6.0],
            &[0.0, 2.0, 5.0, -4.0],
            &[2.0, 5.0, -1.0, 27.0],
        ]);
        let values = solve(&system).values().unwrap();
        assert!((values[0] - 5.0).abs() < 1e-12);
        assert!((values[1] - 3.0).abs() < 1e-12);
        assert!((values[2] + 2.0).abs() < 1e-12);
        assert!(system.is_satisfied_by(&values, Tolerances::absolute(1e-9)));
    }

    #[test]
    fn three_by_three_near_singular() {
        let system = sys(&[
            &[1.0, 2.0, 3.0, 1.0],
            &[4.0, 5.0, 6.0, 2.0],
            &[7.0, 8.0, 9.0, 3.0],
        ]);
        assert!(solve(&system).is_degenerate());
    }

    #[test]
    fn four_variables_unsupported_by_default() {
        let system = sys(&[
            &[1.0, 0.0, 0.0, 0.0, 1.0],
            &[0.0, 1.0, 0.0, 0.0, 2.0],
            &[0.0, 0.0, 1.0, 0.0, 3.0],
            &[0.0, 0.0, 0.0, 1.0, 4.0],
        ]);
        assert_eq!(
            solve(&system),
            LinearSolution::Unsupported {
                size: SystemSize::Four
            }
        );
    }

    #[test]
    fn four_variables_by_elimination() {
        let system = sys(&[
            &[2.0, 1.0, 0.0, 0.0, 3.0],
            &[1.0, 3.0, 1.0, 0.0, 5.0],
            &[0.0, 1.0, 4.0, 1.0, 6.0],
            &[0.0, 0.0, 1.0, 5.0, 6.0],
        ]);
        let config = LinearConfig {
            four_variable: FourVariablePolicy::Elimination,
        };
        let solution = solve_with_config(&system, &config);
        let values = solution.values().unwrap();
        for v in &values {
            assert!((v - 1.0).abs() < 1e-10);
        }
        if let LinearSolution::Solution { values } = solution {
            let names: Vec<_> = values.iter().map(|v| v.name).collect();
            assert_eq!(names, ["w", "x", "y", "z"]);
        }
    }

    #[test]
    fn shape_is_checked() {
        let err = LinearSystem::new(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]).unwrap_err();
        assert_eq!(
            err,
            SolverError::WrongArity {
                what: "entries per equation",
                expected: 3,
                got: 2
            }
        );
        let err = LinearSystem::new(vec![vec![1.0, 2.0]]).unwrap_err();
        assert_eq!(err, SolverError::UnsupportedSystemSize(1));
    }

    #[test]
    fn residuals_measure_substitution_error() {
        let system = sys(&[&[1.0, 1.0, 2.0], &[1.0, -1.0, 0.0]]);
        assert_eq!(system.residuals(&[1.0, 1.0]), vec![0.0, 0.0]);
        assert_eq!(system.residuals(&[2.0, 1.0]), vec![1.0, 1.0]);
    }
}
