//! Plain-text rendering of solver results.
//!
//! Every number prints with four decimals. Rounding happens only here.

use ec_core::{fixed4, subscript};
use ec_solver::linear::UNSUPPORTED_MESSAGE;
use ec_solver::{LinearSolution, Multiplicity, Root, RootSet};

/// Shown when the numeric search found nothing.
pub const NO_REAL_ROOTS_MESSAGE: &str =
    "No real roots found. The equation may have only complex roots.";

pub fn render_linear(solution: &LinearSolution) -> String {
    match solution {
        LinearSolution::Solution { values } => values
            .iter()
            .map(|v| format!("{} = {}", v.name, fixed4(v.value)))
            .collect::<Vec<_>>()
            .join("\n"),
        LinearSolution::Degenerate { message } => format!("The system has {message}"),
        LinearSolution::Unsupported { .. } => UNSUPPORTED_MESSAGE.to_string(),
    }
}

/// `re + imi` / `re - imi`, or the plain real value.
pub fn render_root_value(root: &Root) -> String {
    match *root {
        Root::Real { value, .. } => fixed4(value),
        Root::Complex { re, im } => {
            let sign = if im < 0.0 { '-' } else { '+' };
            format!("{} {} {}i", fixed4(re), sign, fixed4(im.abs()))
        }
    }
}

pub fn render_roots(set: &RootSet) -> String {
    if set.is_empty() {
        return NO_REAL_ROOTS_MESSAGE.to_string();
    }

    if let [root] = set.roots.as_slice() {
        let note = match root.multiplicity() {
            Multiplicity::Simple => None,
            Multiplicity::Double => Some("double root"),
            Multiplicity::Triple => Some("triple root"),
        };
        if let Some(note) = note {
            return format!("x = {} ({note})", render_root_value(root));
        }
    }

    let mut next_label = 1;
    let mut lines = Vec::with_capacity(set.len());
    for root in set.iter() {
        let count = root.multiplicity().count();
        let labels: Vec<String> = (next_label..next_label + count)
            .map(|i| format!("x{}", subscript(i)))
            .collect();
        next_label += count;
        lines.push(format!("{} = {}", labels.join(" = "), render_root_value(root)));
    }
    lines.join("\n")
}

/// Echo of the entered coefficients, e.g. `(1)x2 + (-3)x + 2 = 0`.
pub fn equation_preview(fields: &[String]) -> String {
    let n = fields.len();
    let terms: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = if field.trim().is_empty() {
                "0"
            } else {
                field.trim()
            };
            match n - 1 - i {
                0 => value.to_string(),
                1 => format!("({value})x"),
                power => format!("({value})x{power}"),
            }
        })
        .collect();
    format!("{} = 0", terms.join(" + "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ec_solver::{Degree, LinearSystem, solve_linear, solve_polynomial};

    fn roots(degree: Degree, c: &[f64]) -> String {
        render_roots(&solve_polynomial(degree, c).unwrap())
    }

    #[test]
    fn linear_lines() {
        let sys = LinearSystem::new(vec![vec![1.0, 1.0, 2.0], vec![1.0, -1.0, 0.0]]).unwrap();
        assert_eq!(render_linear(&solve_linear(&sys)), "x = 1.0000\ny = 1.0000");

        let sys = LinearSystem::new(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]]).unwrap();
        assert_eq!(
            render_linear(&solve_linear(&sys)),
            "The system has no unique solution (determinant is zero)"
        );
    }

    #[test]
    fn quadratic_text() {
        assert_eq!(
            roots(Degree::Quadratic, &[1.0, -3.0, 2.0]),
            "x₁ = 2.0000\nx₂ = 1.0000"
        );
        assert_eq!(
            roots(Degree::Quadratic, &[1.0, 2.0, 1.0]),
            "x = -1.0000 (double root)"
        );
        assert_eq!(
            roots(Degree::Quadratic, &[1.0, 0.0, 1.0]),
            "x₁ = 0.0000 + 1.0000i\nx₂ = 0.0000 - 1.0000i"
        );
    }

    #[test]
    fn cubic_text() {
        assert_eq!(
            roots(Degree::Cubic, &[1.0, -3.0, 3.0, -1.0]),
            "x = 1.0000 (triple root)"
        );
        assert_eq!(
            roots(Degree::Cubic, &[1.0, 0.0, -3.0, 2.0]),
            "x₁ = -2.0000\nx₂ = x₃ = 1.0000"
        );
        assert_eq!(
            roots(Degree::Cubic, &[1.0, -6.0, 11.0, -6.0]),
            "x₁ = 3.0000\nx₂ = 1.0000\nx₃ = 2.0000"
        );
    }

    #[test]
    fn numeric_text() {
        assert_eq!(
            roots(Degree::Quartic, &[1.0, 0.0, -5.0, 0.0, 4.0]),
            "x₁ = -2.0000\nx₂ = -1.0000\nx₃ = 1.0000\nx₄ = 2.0000"
        );
        assert_eq!(
            roots(Degree::Quartic, &[1.0, 0.0, 0.0, 0.0, 1.0]),
            NO_REAL_ROOTS_MESSAGE
        );
    }

    #[test]
    fn preview() {
        let fields: Vec<String> = ["1", "-3", ""].iter().map(|s| s.to_string()).collect();
        assert_eq!(equation_preview(&fields), "(1)x2 + (-3)x + 0 = 0");
    }
}
