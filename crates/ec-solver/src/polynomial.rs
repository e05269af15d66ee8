//! Single-variable polynomials of degree 2 through 5 and their roots.

use crate::cubic::{CubicCase, solve_cubic};
use crate::error::{SolverError, SolverResult};
use crate::newton::{NewtonConfig, NewtonReport, find_real_roots};
use crate::quadratic::{QuadraticCase, solve_quadratic};
use ec_core::{Real, first_non_finite};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported polynomial degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Degree {
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
}

impl Degree {
    pub fn value(self) -> usize {
        match self {
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
            Degree::Quartic => 4,
            Degree::Quintic => 5,
        }
    }

    pub fn coefficient_count(self) -> usize {
        self.value() + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Degree::Quadratic => "Quadratic",
            Degree::Cubic => "Cubic",
            Degree::Quartic => "Quartic",
            Degree::Quintic => "Quintic",
        }
    }
}

impl TryFrom<usize> for Degree {
    type Error = SolverError;

    fn try_from(n: usize) -> SolverResult<Self> {
        match n {
            2 => Ok(Degree::Quadratic),
            3 => Ok(Degree::Cubic),
            4 => Ok(Degree::Quartic),
            5 => Ok(Degree::Quintic),
            other => Err(SolverError::UnsupportedDegree(other)),
        }
    }
}

/// Real coefficients, highest degree first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    degree: Degree,
    coefficients: Vec<Real>,
}

impl Polynomial {
    /// Build from coefficients alone; the degree is `len - 1`.
    pub fn new(coefficients: Vec<Real>) -> SolverResult<Self> {
        let degree = Degree::try_from(coefficients.len().saturating_sub(1))?;
        Self::with_degree(degree, coefficients)
    }

    /// Validate `coefficients` against a declared degree.
    ///
    /// Checks run in a fixed order: count, then leading zero, then finiteness.
    pub fn with_degree(degree: Degree, coefficients: Vec<Real>) -> SolverResult<Self> {
        if coefficients.len() != degree.coefficient_count() {
            return Err(SolverError::WrongArity {
                what: "coefficients",
                expected: degree.coefficient_count(),
                got: coefficients.len(),
            });
        }
        if coefficients[0] == 0.0 {
            return Err(SolverError::LeadingCoefficientZero);
        }
        if let Some(index) = first_non_finite(&coefficients) {
            return Err(SolverError::InvalidCoefficient {
                index,
                value: coefficients[index],
            });
        }
        Ok(Self {
            degree,
            coefficients,
        })
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn coefficients(&self) -> &[Real] {
        &self.coefficients
    }

    pub fn leading(&self) -> Real {
        self.coefficients[0]
    }

    /// Divide through by the leading coefficient.
    pub fn normalized(&self) -> Polynomial {
        let lead = self.leading();
        Polynomial {
            degree: self.degree,
            coefficients: self.coefficients.iter().map(|c| c / lead).collect(),
        }
    }

    /// Horner evaluation.
    pub fn eval(&self, x: Real) -> Real {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// First derivative at `x`.
    pub fn derivative_at(&self, x: Real) -> Real {
        let n = self.coefficients.len() - 1;
        self.coefficients[..n]
            .iter()
            .enumerate()
            .fold(0.0, |acc, (i, &c)| acc * x + c * (n - i) as Real)
    }

    /// Roots with the default Newton configuration for degrees 4 and 5.
    pub fn roots(&self) -> RootSet {
        self.roots_with(&NewtonConfig::default())
    }

    pub fn roots_with(&self, config: &NewtonConfig) -> RootSet {
        let c = &self.coefficients;
        match self.degree {
            Degree::Quadratic => {
                let (case, roots) = solve_quadratic(c[0], c[1], c[2]);
                RootSet {
                    roots,
                    method: RootMethod::Quadratic(case),
                }
            }
            Degree::Cubic => {
                let (case, roots) = solve_cubic(c[0], c[1], c[2], c[3]);
                RootSet {
                    roots,
                    method: RootMethod::Cubic(case),
                }
            }
            Degree::Quartic | Degree::Quintic => {
                let (values, report) = find_real_roots(self, config);
                RootSet {
                    roots: values.into_iter().map(Root::simple).collect(),
                    method: RootMethod::Newton(report),
                }
            }
        }
    }
}

/// How many times a real root repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Multiplicity {
    Simple,
    Double,
    Triple,
}

impl Multiplicity {
    pub fn count(self) -> usize {
        match self {
            Multiplicity::Simple => 1,
            Multiplicity::Double => 2,
            Multiplicity::Triple => 3,
        }
    }
}

/// A real root or one member of a complex-conjugate pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Root {
    Real {
        value: Real,
        multiplicity: Multiplicity,
    },
    Complex {
        re: Real,
        im: Real,
    },
}

impl Root {
    pub fn simple(value: Real) -> Self {
        Root::Real {
            value,
            multiplicity: Multiplicity::Simple,
        }
    }

    pub fn repeated(value: Real, multiplicity: Multiplicity) -> Self {
        Root::Real {
            value,
            multiplicity,
        }
    }

    pub fn real_part(&self) -> Real {
        match *self {
            Root::Real { value, .. } => value,
            Root::Complex { re, .. } => re,
        }
    }

    pub fn imaginary_part(&self) -> Real {
        match *self {
            Root::Real { .. } => 0.0,
            Root::Complex { im, .. } => im,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Root::Real { .. })
    }

    pub fn multiplicity(&self) -> Multiplicity {
        match *self {
            Root::Real { multiplicity, .. } => multiplicity,
            Root::Complex { .. } => Multiplicity::Simple,
        }
    }
}

/// Which algorithm branch produced a root set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum RootMethod {
    Quadratic(QuadraticCase),
    Cubic(CubicCase),
    Newton(NewtonReport),
}

/// Ordered roots of one polynomial.
///
/// Closed-form results keep derivation order. Newton results are
/// deduplicated and ascending.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RootSet {
    pub roots: Vec<Root>,
    pub method: RootMethod,
}

impl RootSet {
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Root> {
        self.roots.iter()
    }

    /// Values of the real roots, in set order.
    pub fn real_values(&self) -> Vec<Real> {
        self.roots
            .iter()
            .filter(|r| r.is_real())
            .map(Root::real_part)
            .collect()
    }
}

/// Validate and solve in one step.
pub fn solve_polynomial(degree: Degree, coefficients: &[Real]) -> SolverResult<RootSet> {
    solve_polynomial_with(degree, coefficients, &NewtonConfig::default())
}

pub fn solve_polynomial_with(
    degree: Degree,
    coefficients: &[Real],
    config: &NewtonConfig,
) -> SolverResult<RootSet> {
    let poly = Polynomial::with_degree(degree, coefficients.to_vec())?;
    Ok(poly.roots_with(config))
}
