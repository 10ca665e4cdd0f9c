//! pocketcalc - single-screen keypad calculator
//!
//! A numeric display and a grid of buttons with one pending binary
//! operation at a time: no precedence, no parentheses. Pressing a second
//! operator evaluates what is pending, left to right.
//!
//! The interesting part is [`core::CalculatorState`], the state machine
//! that turns a stream of button tokens into display updates. Front ends
//! (the terminal UI in [`tui`], or anything implementing
//! [`driver::CalculatorDriver`]) only forward tokens and render the display.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut calc = CalculatorState::new();
//! calc.handle_presses(parse_sequence("4+2+3=").unwrap());
//! assert_eq!(calc.current_display(), "9.0");
//!
//! calc.handle_press(ButtonToken::Clear);
//! assert_eq!(calc.current_display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{evaluate, try_evaluate, ERROR_DISPLAY};
    pub use crate::core::{
        parse_sequence, ButtonToken, CalcError, CalcResult, CalculatorState, Mode, Operand,
        Operation, StateSnapshot,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{Area, Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, TuiConfig};
}
