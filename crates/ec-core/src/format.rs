//! Fixed-point rendering shared by the solvers' output boundary.

use crate::Real;

/// Decimal places used for every solver-reported value.
pub const SOLUTION_PLACES: usize = 4;

/// Decimal places kept for free-form expression results before trimming.
pub const EXPRESSION_PLACES: usize = 8;

/// Render `v` with exactly `places` decimals. Anything that rounds to zero
/// prints unsigned.
pub fn fixed(v: Real, places: usize) -> String {
    let s = format!("{v:.places$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

/// Shorthand for [`fixed`] at [`SOLUTION_PLACES`].
pub fn fixed4(v: Real) -> String {
    fixed(v, SOLUTION_PLACES)
}

/// Round to `places` decimals, then drop trailing zeros (and a bare point).
pub fn trimmed(v: Real, places: usize) -> String {
    let mut s = fixed(v, places);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Unicode subscript digits for root labels (`x₁`, `x₁₂`).
pub fn subscript(n: usize) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_four_places() {
        assert_eq!(fixed4(1.0), "1.0000");
        assert_eq!(fixed4(-2.5), "-2.5000");
        assert_eq!(fixed4(1.0 / 3.0), "0.3333");
        assert_eq!(fixed4(-0.0), "0.0000");
        assert_eq!(fixed4(-1e-5), "0.0000");
        assert_eq!(fixed4(-5e-4), "-0.0005");
    }

    #[test]
    fn trimmed_drops_zeros() {
        assert_eq!(trimmed(0.1 + 0.2, EXPRESSION_PLACES), "0.3");
        assert_eq!(trimmed(4.0, EXPRESSION_PLACES), "4");
        assert_eq!(trimmed(-1.5, EXPRESSION_PLACES), "-1.5");
        assert_eq!(trimmed(-1e-12, EXPRESSION_PLACES), "0");
        assert_eq!(
            trimmed(std::f64::consts::PI, EXPRESSION_PLACES),
            "3.14159265"
        );
    }

    #[test]
    fn subscripts() {
        assert_eq!(subscript(1), "₁");
        assert_eq!(subscript(5), "₅");
        assert_eq!(subscript(12), "₁₂");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fixed4_is_within_half_a_unit(v in -1.0e6_f64..1.0e6_f64) {
            let back: Real = fixed4(v).parse().unwrap();
            prop_assert!((back - v).abs() <= 5e-5 + 1e-9);
        }

        #[test]
        fn fixed4_never_prints_negative_zero(v in -4.9e-5_f64..4.9e-5_f64) {
            prop_assert_eq!(fixed4(v), "0.0000");
        }

        #[test]
        fn subscript_has_one_glyph_per_digit(n in 0usize..1_000_000) {
            prop_assert_eq!(subscript(n).chars().count(), n.to_string().len());
        }
    }
}
