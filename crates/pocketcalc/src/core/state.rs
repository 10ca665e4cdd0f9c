//! The calculator's input state machine
//!
//! One owned [`CalculatorState`] per session. Every change goes through
//! [`CalculatorState::handle_press`]; front ends read the display back with
//! [`CalculatorState::current_display`].
//!
//! ```rust
//! use pocketcalc::core::{ButtonToken, CalculatorState, Operation};
//!
//! let mut calc = CalculatorState::new();
//! calc.handle_press(ButtonToken::Digit(1));
//! calc.handle_press(ButtonToken::Operator(Operation::Add));
//! calc.handle_press(ButtonToken::Digit(2));
//! calc.handle_press(ButtonToken::Equals);
//! assert_eq!(calc.current_display(), "3.0");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::evaluator::{self, ERROR_DISPLAY};
use crate::core::{ButtonToken, Operand, Operation};

/// Display text of a freshly created or cleared calculator
pub const INITIAL_DISPLAY: &str = "0";

/// Which operand the next digit goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Typing the left-hand operand
    #[default]
    EnteringFirst,
    /// An operator is pending; typing the right-hand operand
    EnteringSecond(Operation),
    /// An `=` result (or `Error`) is shown; the next digit starts over
    ShowingResult,
}

impl Mode {
    /// The pending operator, if any
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::EnteringSecond(op) => Some(*op),
            Self::EnteringFirst | Self::ShowingResult => None,
        }
    }

    /// True while digits accumulate into the second operand
    #[must_use]
    pub const fn operator_selected(&self) -> bool {
        matches!(self, Self::EnteringSecond(_))
    }
}

/// Read-only view of the calculator's logical fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Text on the display
    pub display: String,
    /// Left-hand operand text
    pub first_operand: String,
    /// Right-hand operand text
    pub second_operand: String,
    /// Pending operator
    pub operation: Option<Operation>,
    /// Whether digits go to the second operand
    pub operator_selected: bool,
    /// Text of the most recent evaluation, empty if none
    pub last_result: String,
}

/// The calculator's complete mutable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    display: String,
    first: Operand,
    second: Operand,
    mode: Mode,
    last_result: Option<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: display `"0"`, nothing else set
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            first: Operand::new(),
            second: Operand::new(),
            mode: Mode::EnteringFirst,
            last_result: None,
        }
    }

    /// Text the presentation layer should show
    #[must_use]
    pub fn current_display(&self) -> &str {
        &self.display
    }

    /// Current mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Left-hand operand
    #[must_use]
    pub fn first_operand(&self) -> &Operand {
        &self.first
    }

    /// Right-hand operand
    #[must_use]
    pub fn second_operand(&self) -> &Operand {
        &self.second
    }

    /// Result of the most recent evaluation, if it has not been discarded
    #[must_use]
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Returns true when the display shows a failed evaluation
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Copies the logical fields out
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            display: self.display.clone(),
            first_operand: self.first.as_str().to_string(),
            second_operand: self.second.as_str().to_string(),
            operation: self.mode.operation(),
            operator_selected: self.mode.operator_selected(),
            last_result: self.last_result.clone().unwrap_or_default(),
        }
    }

    /// Applies one button press.
    ///
    /// Total: sequences that make no sense (operator with nothing typed,
    /// incomplete `=`, second decimal point) leave the state untouched.
    pub fn handle_press(&mut self, token: ButtonToken) {
        match token {
            ButtonToken::Digit(d) => self.press_digit(d),
            ButtonToken::Decimal => self.press_decimal(),
            ButtonToken::Operator(op) => self.press_operator(op),
            ButtonToken::Equals => self.press_equals(),
            ButtonToken::Clear => self.clear(),
        }
        tracing::debug!(
            token = %token,
            mode = ?self.mode,
            display = %self.display,
            "button pressed"
        );
    }

    /// Applies a sequence of presses in order
    pub fn handle_presses<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = ButtonToken>,
    {
        for token in tokens {
            self.handle_press(token);
        }
    }

    /// Full reset to the initial state
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn press_digit(&mut self, digit: u8) {
        let operand = self.editing_operand();
        operand.push_digit(digit);
        let text = operand.as_str().to_string();
        self.display = text;
    }

    fn press_decimal(&mut self) {
        let operand = self.editing_operand();
        if !operand.push_decimal() {
            tracing::trace!("duplicate decimal point ignored");
            return;
        }
        let text = operand.as_str().to_string();
        self.display = text;
    }

    /// Picks the operand that typing goes to, restarting the first operand
    /// when a result is on display.
    fn editing_operand(&mut self) -> &mut Operand {
        match self.mode {
            Mode::EnteringSecond(_) => &mut self.second,
            Mode::ShowingResult => {
                self.first.clear();
                self.last_result = None;
                self.mode = Mode::EnteringFirst;
                &mut self.first
            }
            Mode::EnteringFirst => &mut self.first,
        }
    }

    fn press_operator(&mut self, op: Operation) {
        if self.first.is_empty() {
            tracing::trace!(op = %op, "operator ignored: no left operand");
            return;
        }
        if let Mode::EnteringSecond(pending) = self.mode {
            if !self.second.is_empty() {
                self.evaluate_pending(pending);
            }
        }
        self.mode = Mode::EnteringSecond(op);
    }

    fn press_equals(&mut self) {
        let Mode::EnteringSecond(pending) = self.mode else {
            tracing::trace!("equals ignored: no pending operator");
            return;
        };
        if self.second.is_empty() {
            tracing::trace!("equals ignored: no right operand");
            return;
        }
        self.evaluate_pending(pending);
        self.mode = Mode::ShowingResult;
    }

    /// Evaluates `first pending second` and folds the result, `Error`
    /// included, into the first operand, the display and `last_result`.
    fn evaluate_pending(&mut self, pending: Operation) {
        let result = evaluator::evaluate(self.first.as_str(), pending, self.second.as_str());
        self.second.clear();
        self.display.clone_from(&result);
        self.first = Operand::from_text(result.clone());
        self.last_result = Some(result);
    }
}
