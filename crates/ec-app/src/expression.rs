//! Free-form arithmetic expressions, evaluated with `meval`.

use ec_core::{EXPRESSION_PLACES, trimmed};

use crate::error::{AppError, AppResult};

/// What the display shows when an expression cannot be evaluated.
pub const ERROR_SENTINEL: &str = "Error";

/// Keypad glyphs rewritten to names the evaluator knows.
fn normalize(expression: &str) -> String {
    expression
        .replace('π', "pi")
        .replace('√', "sqrt")
        .replace('×', "*")
        .replace('÷', "/")
}

/// Evaluate to a number.
pub fn evaluate_value(expression: &str) -> AppResult<f64> {
    let parsed: meval::Expr = normalize(expression)
        .parse()
        .map_err(|e: meval::Error| AppError::Expression(e.to_string()))?;

    let mut ctx = meval::Context::new();
    ctx.var("pi", std::f64::consts::PI);
    ctx.var("e", std::f64::consts::E);
    // `log` is the natural logarithm on the keypad.
    ctx.func("log", f64::ln);

    let value = parsed
        .eval_with_context(ctx)
        .map_err(|e| AppError::Expression(e.to_string()))?;
    if !value.is_finite() {
        return Err(AppError::Expression(format!("non-finite result {value}")));
    }
    Ok(value)
}

/// Evaluate and format with at most eight decimals, trailing zeros dropped.
pub fn evaluate(expression: &str) -> AppResult<String> {
    let value = evaluate_value(expression)?;
    tracing::debug!(expression, value, "evaluated expression");
    Ok(trimmed(value, EXPRESSION_PLACES))
}

/// Like [`evaluate`] but collapses failures to [`ERROR_SENTINEL`].
pub fn evaluate_or_sentinel(expression: &str) -> String {
    evaluate(expression).unwrap_or_else(|_| ERROR_SENTINEL.to_string())
}
