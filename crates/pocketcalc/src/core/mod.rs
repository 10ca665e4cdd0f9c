//! Calculator core: button tokens, operators, the evaluator and the
//! input state machine.
//!
//! Nothing in here performs I/O. A front end feeds [`ButtonToken`]s into
//! [`CalculatorState::handle_press`] and re-renders from
//! [`CalculatorState::current_display`].

pub mod evaluator;
mod operand;
mod operations;
pub mod state;
mod token;

pub use operand::Operand;
pub use operations::Operation;
pub use state::{CalculatorState, Mode, StateSnapshot};
pub use token::{parse_sequence, ButtonToken};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Operand text does not parse as a decimal number
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),
    /// Division with a divisor of exactly zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Character outside the keypad's token set
    #[error("Unknown button token: {0:?}")]
    UnknownToken(char),
}
