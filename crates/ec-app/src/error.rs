//! Error types for the ec-app service layer.

use std::path::PathBuf;

use ec_solver::SolverError;

/// Message shown for linear-system fields that are not numbers.
pub const LINEAR_INPUT_ERROR: &str = "Invalid input. Please check your equations.";

/// Application error type that wraps solver errors and session I/O
/// and provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Solver validation failures pass through verbatim.
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Expression error: {0}")]
    Expression(String),

    #[error("Unknown calculator mode: {0}")]
    UnknownMode(String),

    #[error("History entry {index} not found ({len} entries)")]
    HistoryIndex { index: usize, len: usize },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Batch error: {0}")]
    Batch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ec-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Settings(err.to_string())
    }
}
