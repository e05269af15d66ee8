//! YAML batch files: many independent problems solved in parallel.
//!
//! Solver calls share no state, so problems are fanned out with rayon and
//! collected back in file order.

use std::path::Path;

use ec_core::first_non_finite;
use ec_solver::{
    Degree, LinearConfig, LinearSystem, NewtonConfig, SolverError, SystemSize,
    solve_linear_with_config, solve_polynomial_with,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::render::{render_linear, render_roots};
use crate::report::Report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub problems: Vec<ProblemDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProblemDef {
    Linear {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        variables: usize,
        equations: Vec<Vec<f64>>,
    },
    Polynomial {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        degree: usize,
        coefficients: Vec<f64>,
    },
}

impl ProblemDef {
    pub fn name(&self) -> Option<&str> {
        match self {
            ProblemDef::Linear { name, .. } | ProblemDef::Polynomial { name, .. } => {
                name.as_deref()
            }
        }
    }
}

/// Result of one batch entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub report: Report,
    pub text: String,
}

/// Load a batch file from YAML.
pub fn load_batch(path: &Path) -> AppResult<BatchFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let batch: BatchFile = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Batch(format!("Failed to parse batch YAML: {}", e)))?;
    Ok(batch)
}

/// Solve every problem, preserving input order.
pub fn run_batch(
    batch: &BatchFile,
    linear: &LinearConfig,
    newton: &NewtonConfig,
) -> Vec<BatchOutcome> {
    tracing::debug!(problems = batch.problems.len(), "running batch");
    batch
        .problems
        .par_iter()
        .enumerate()
        .map(|(index, problem)| {
            let (report, text) = match solve_problem(problem, linear, newton) {
                Ok(solved) => solved,
                Err(err) => (Report::from(&err), err.to_string()),
            };
            BatchOutcome {
                index,
                name: problem.name().map(str::to_string),
                report,
                text,
            }
        })
        .collect()
}

fn solve_problem(
    problem: &ProblemDef,
    linear: &LinearConfig,
    newton: &NewtonConfig,
) -> Result<(Report, String), SolverError> {
    match problem {
        ProblemDef::Linear {
            variables,
            equations,
            ..
        } => {
            let size = SystemSize::try_from(*variables)?;
            let system = LinearSystem::with_size(size, equations.clone())?;
            for row in system.rows() {
                if let Some(index) = first_non_finite(row) {
                    return Err(SolverError::InvalidCoefficient {
                        index,
                        value: row[index],
                    });
                }
            }
            let solution = solve_linear_with_config(&system, linear);
            Ok((Report::from(&solution), render_linear(&solution)))
        }
        ProblemDef::Polynomial {
            degree,
            coefficients,
            ..
        } => {
            let degree = Degree::try_from(*degree)?;
            let roots = solve_polynomial_with(degree, coefficients, newton)?;
            Ok((Report::from(&roots), render_roots(&roots)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH_YAML: &str = r#"
problems:
  - kind: linear
    name: simple
    variables: 2
    equations:
      - [1, 1, 2]
      - [1, -1, 0]
  - kind: polynomial
    degree: 2
    coefficients: [1, 0, 1]
  - kind: polynomial
    name: bad
    degree: 3
    coefficients: [0, 1, 2, 3]
  - kind: linear
    variables: 4
    equations:
      - [1, 0, 0, 0, 1]
      - [0, 1, 0, 0, 2]
      - [0, 0, 1, 0, 3]
      - [0, 0, 0, 1, 4]
"#;

    #[test]
    fn parses_and_solves_in_order() {
        let batch: BatchFile = serde_yaml::from_str(BATCH_YAML).unwrap();
        assert_eq!(batch.problems.len(), 4);

        let outcomes = run_batch(&batch, &LinearConfig::default(), &NewtonConfig::default());
        let indices: Vec<usize> = outcomes.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);

        assert_eq!(outcomes[0].name.as_deref(), Some("simple"));
        assert_eq!(
            outcomes[0].report,
            Report::Solution {
                values: vec![1.0, 1.0]
            }
        );
        assert_eq!(outcomes[1].text, "x₁ = 0.0000 + 1.0000i\nx₂ = 0.0000 - 1.0000i");
        assert!(matches!(
            &outcomes[2].report,
            Report::ValidationError { reason, .. } if reason == "leading_zero"
        ));
        assert_eq!(outcomes[3].report, Report::Unsupported);
    }

    #[test]
    fn elimination_policy_applies_to_batches() {
        let batch: BatchFile = serde_yaml::from_str(BATCH_YAML).unwrap();
        let linear = LinearConfig {
            four_variable: ec_solver::FourVariablePolicy::Elimination,
        };
        let outcomes = run_batch(&batch, &linear, &NewtonConfig::default());
        assert_eq!(
            outcomes[3].report,
            Report::Solution {
                values: vec![1.0, 2.0, 3.0, 4.0]
            }
        );
    }

    #[test]
    fn wrong_shape_is_a_validation_error() {
        let batch = BatchFile {
            problems: vec![ProblemDef::Linear {
                name: None,
                variables: 3,
                equations: vec![vec![1.0, 2.0, 3.0]],
            }],
        };
        let outcomes = run_batch(&batch, &LinearConfig::default(), &NewtonConfig::default());
        assert!(matches!(
            &outcomes[0].report,
            Report::ValidationError { reason, .. } if reason == "wrong_arity"
        ));
    }
}
