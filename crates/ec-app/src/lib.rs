//! Shared application service layer for eqcalc.
//!
//! This crate sits between a front end and the solver engine: it parses text
//! fields, runs the solvers, renders results, evaluates free-form expressions
//! and keeps the session's history and settings.

pub mod batch;
pub mod error;
pub mod expression;
pub mod history;
pub mod mode;
pub mod parse;
pub mod render;
pub mod report;
pub mod settings;
pub mod solve_service;
pub mod store;

// Re-export key types for convenience
pub use batch::{BatchFile, BatchOutcome, ProblemDef, load_batch, run_batch};
pub use error::{AppError, AppResult};
pub use expression::{ERROR_SENTINEL, evaluate, evaluate_or_sentinel};
pub use history::{History, HistoryEntry};
pub use mode::{CalculatorMode, coefficient_labels, polynomial_template};
pub use render::{equation_preview, render_linear, render_roots};
pub use report::{Report, RootReport};
pub use settings::Settings;
pub use solve_service::{
    LinearOutcome, PolynomialOutcome, solve_linear_fields, solve_linear_rows,
    solve_polynomial_fields,
};
pub use store::SessionStore;
