//! Text-field parsing.
//!
//! A blank field reads as `0`, matching the input placeholder.

use ec_core::Real;

/// Parse one field. `None` when the text is not a number.
pub fn parse_field(text: &str) -> Option<Real> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<Real>().ok()
}

/// Parse a coefficient field, letting the solver reject garbage as NaN so
/// that its leading-zero check still runs first.
pub fn parse_coefficient(text: &str) -> Real {
    parse_field(text).unwrap_or(Real::NAN)
}

/// Split a comma-separated equation row into fields.
pub fn split_row(row: &str) -> Vec<String> {
    row.split(',').map(|f| f.trim().to_string()).collect()
}
