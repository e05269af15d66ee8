//! Error types for solver operations.
//!
//! Only malformed input is an error. Singular systems, unsupported system
//! sizes and empty numeric root sets are ordinary results.

use thiserror::Error;

/// Validation failures raised before any algorithm runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Wrong number of {what}: expected {expected}, got {got}")]
    WrongArity {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Leading coefficient cannot be zero")]
    LeadingCoefficientZero,

    #[error("All coefficients must be valid numbers")]
    InvalidCoefficient { index: usize, value: f64 },

    #[error("Unsupported polynomial degree: {0}")]
    UnsupportedDegree(usize),

    #[error("Unsupported system size: {0} variables")]
    UnsupportedSystemSize(usize),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    /// Stable machine-readable reason used by report adapters.
    pub fn reason(&self) -> &'static str {
        match self {
            SolverError::WrongArity { .. } => "wrong_arity",
            SolverError::LeadingCoefficientZero => "leading_zero",
            SolverError::InvalidCoefficient { .. } => "invalid_number",
            SolverError::UnsupportedDegree(_) => "unsupported_degree",
            SolverError::UnsupportedSystemSize(_) => "unsupported_size",
        }
    }
}
