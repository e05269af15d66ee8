//! Algebraic solver engine.
//!
//! Two independent, side-effect-free solvers:
//! - [`linear`]: systems of 2 or 3 linear equations (4 on request), solved by
//!   determinant formulas and Cramer's rule
//! - [`polynomial`]: real and complex roots of degree 2..=5 polynomials,
//!   closed-form for quadratics and cubics, seeded Newton-Raphson above that
//!
//! Every call is a pure function of its arguments and safe to run from many
//! threads at once.

pub mod cubic;
pub mod elimination;
pub mod error;
pub mod linear;
pub mod newton;
pub mod polynomial;
pub mod quadratic;

pub use cubic::CubicCase;
pub use error::{SolverError, SolverResult};
pub use linear::{
    FourVariablePolicy, LinearConfig, LinearSolution, LinearSystem, SystemSize, VariableValue,
    solve as solve_linear, solve_with_config as solve_linear_with_config,
};
pub use newton::{NewtonConfig, NewtonReport, SeedOutcome};
pub use polynomial::{
    Degree, Multiplicity, Polynomial, Root, RootMethod, RootSet, solve_polynomial,
    solve_polynomial_with,
};
pub use quadratic::QuadraticCase;
