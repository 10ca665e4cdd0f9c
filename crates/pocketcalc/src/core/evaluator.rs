//! Arithmetic evaluator: one operator, two operand strings
//!
//! Stateless. Called only by the state machine; front ends never evaluate
//! directly.

use crate::core::operand::parse_operand;
use crate::core::{CalcResult, Operation};

/// Display text shown when an evaluation fails
pub const ERROR_DISPLAY: &str = "Error";

/// Parses both operands and applies `op`, keeping the typed error.
pub fn try_evaluate(a: &str, op: Operation, b: &str) -> CalcResult<f64> {
    let lhs = parse_operand(a)?;
    let rhs = parse_operand(b)?;
    op.apply(lhs, rhs)
}

/// Evaluates `a op b` and renders the result for the display.
///
/// Any failure (unparseable operand, division by zero) becomes
/// [`ERROR_DISPLAY`].
#[must_use]
pub fn evaluate(a: &str, op: Operation, b: &str) -> String {
    match try_evaluate(a, op, b) {
        Ok(value) => format_value(value),
        Err(err) => {
            tracing::debug!(lhs = a, op = %op, rhs = b, error = %err, "evaluation failed");
            ERROR_DISPLAY.to_string()
        }
    }
}

/// Canonical float text: shortest round-trip digits, always with a
/// fractional part for finite integral values (`3.0`, `0.30000000000000004`,
/// `1e16`, `inf`).
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}
