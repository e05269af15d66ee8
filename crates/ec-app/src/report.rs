//! Machine-readable result reports.
//!
//! Shapes follow the adapter contract: a `kind` tag plus the payload for
//! that outcome.

use ec_solver::{LinearSolution, Multiplicity, Root, RootSet, SolverError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootReport {
    pub real: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imaginary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<u8>,
}

impl From<&Root> for RootReport {
    fn from(root: &Root) -> Self {
        match *root {
            Root::Real {
                value,
                multiplicity,
            } => RootReport {
                real: value,
                imaginary: None,
                multiplicity: match multiplicity {
                    Multiplicity::Simple => None,
                    Multiplicity::Double => Some(2),
                    Multiplicity::Triple => Some(3),
                },
            },
            Root::Complex { re, im } => RootReport {
                real: re,
                imaginary: Some(im),
                multiplicity: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Solution { values: Vec<f64> },
    Degenerate { message: String },
    Unsupported,
    Roots { roots: Vec<RootReport> },
    ValidationError { reason: String, message: String },
}

impl From<&LinearSolution> for Report {
    fn from(solution: &LinearSolution) -> Self {
        match solution {
            LinearSolution::Solution { values } => Report::Solution {
                values: values.iter().map(|v| v.value).collect(),
            },
            LinearSolution::Degenerate { message } => Report::Degenerate {
                message: message.to_string(),
            },
            LinearSolution::Unsupported { .. } => Report::Unsupported,
        }
    }
}

impl From<&RootSet> for Report {
    fn from(set: &RootSet) -> Self {
        Report::Roots {
            roots: set.iter().map(RootReport::from).collect(),
        }
    }
}

impl From<&SolverError> for Report {
    fn from(err: &SolverError) -> Self {
        Report::ValidationError {
            reason: err.reason().to_string(),
            message: err.to_string(),
        }
    }
}
