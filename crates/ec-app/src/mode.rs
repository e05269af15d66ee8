//! Calculator modes and their display metadata.

use std::fmt;
use std::str::FromStr;

use ec_solver::{Degree, SystemSize};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// What the calculator is currently solving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorMode {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "equations-2var")]
    Equations2Var,
    #[serde(rename = "equations-3var")]
    Equations3Var,
    #[serde(rename = "equations-4var")]
    Equations4Var,
    #[serde(rename = "polynomial-2")]
    Polynomial2,
    #[serde(rename = "polynomial-3")]
    Polynomial3,
    #[serde(rename = "polynomial-4")]
    Polynomial4,
    #[serde(rename = "polynomial-5")]
    Polynomial5,
}

impl CalculatorMode {
    pub const ALL: [CalculatorMode; 8] = [
        CalculatorMode::Standard,
        CalculatorMode::Equations2Var,
        CalculatorMode::Equations3Var,
        CalculatorMode::Equations4Var,
        CalculatorMode::Polynomial2,
        CalculatorMode::Polynomial3,
        CalculatorMode::Polynomial4,
        CalculatorMode::Polynomial5,
    ];

    /// Stable identifier, as persisted in settings.
    pub fn id(self) -> &'static str {
        match self {
            CalculatorMode::Standard => "standard",
            CalculatorMode::Equations2Var => "equations-2var",
            CalculatorMode::Equations3Var => "equations-3var",
            CalculatorMode::Equations4Var => "equations-4var",
            CalculatorMode::Polynomial2 => "polynomial-2",
            CalculatorMode::Polynomial3 => "polynomial-3",
            CalculatorMode::Polynomial4 => "polynomial-4",
            CalculatorMode::Polynomial5 => "polynomial-5",
        }
    }

    /// Short badge label.
    pub fn label(self) -> &'static str {
        match self {
            CalculatorMode::Standard => "STD",
            CalculatorMode::Equations2Var => "2VAR",
            CalculatorMode::Equations3Var => "3VAR",
            CalculatorMode::Equations4Var => "4VAR",
            CalculatorMode::Polynomial2 => "POLY2",
            CalculatorMode::Polynomial3 => "POLY3",
            CalculatorMode::Polynomial4 => "POLY4",
            CalculatorMode::Polynomial5 => "POLY5",
        }
    }

    pub fn title(self) -> String {
        match (self.system_size(), self.degree()) {
            (Some(size), _) => format!("{}-Variable System", size.unknowns()),
            (_, Some(degree)) => format!("{} Equation Solver", degree.name()),
            _ => "Standard Calculator".to_string(),
        }
    }

    pub fn system_size(self) -> Option<SystemSize> {
        match self {
            CalculatorMode::Equations2Var => Some(SystemSize::Two),
            CalculatorMode::Equations3Var => Some(SystemSize::Three),
            CalculatorMode::Equations4Var => Some(SystemSize::Four),
            _ => None,
        }
    }

    pub fn degree(self) -> Option<Degree> {
        match self {
            CalculatorMode::Polynomial2 => Some(Degree::Quadratic),
            CalculatorMode::Polynomial3 => Some(Degree::Cubic),
            CalculatorMode::Polynomial4 => Some(Degree::Quartic),
            CalculatorMode::Polynomial5 => Some(Degree::Quintic),
            _ => None,
        }
    }

    pub fn for_system(size: SystemSize) -> Self {
        match size {
            SystemSize::Two => CalculatorMode::Equations2Var,
            SystemSize::Three => CalculatorMode::Equations3Var,
            SystemSize::Four => CalculatorMode::Equations4Var,
        }
    }

    pub fn for_degree(degree: Degree) -> Self {
        match degree {
            Degree::Quadratic => CalculatorMode::Polynomial2,
            Degree::Cubic => CalculatorMode::Polynomial3,
            Degree::Quartic => CalculatorMode::Polynomial4,
            Degree::Quintic => CalculatorMode::Polynomial5,
        }
    }
}

/// Template shown above the coefficient fields.
pub fn polynomial_template(degree: Degree) -> &'static str {
    match degree {
        Degree::Quadratic => "ax² + bx + c = 0",
        Degree::Cubic => "ax³ + bx² + cx + d = 0",
        Degree::Quartic => "ax⁴ + bx³ + cx² + dx + e = 0",
        Degree::Quintic => "ax⁵ + bx⁴ + cx³ + dx² + ex + f = 0",
    }
}

/// Field labels `a`, `b`, ... for a degree's coefficients.
pub fn coefficient_labels(degree: Degree) -> &'static [&'static str] {
    const LABELS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
    &LABELS[..degree.coefficient_count()]
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalculatorMode {
    type Err = AppError;

    /// Accepts either the id (`polynomial-3`) or the label (`POLY3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CalculatorMode::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(wanted) || m.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::UnknownMode(wanted.to_string()))
    }
}
