//! Operand text as typed on the keypad

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Operand text as the user typed it.
///
/// Keeps the raw text (so a trailing `.` is displayed as typed) and holds at
/// most one decimal point. [`Operand::parse`] is the only place the text is
/// turned into a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Operand {
    /// Creates an empty operand
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-produced text, e.g. an evaluation result
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Appends a digit (0-9)
    pub fn push_digit(&mut self, digit: u8) {
        if let Some(c) = char::from_digit(u32::from(digit), 10) {
            self.0.push(c);
        }
    }

    /// Appends a decimal point. Returns false (and changes nothing) if the
    /// operand already has one.
    pub fn push_decimal(&mut self) -> bool {
        if self.has_decimal() {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Returns true if the operand contains a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.0.contains('.')
    }

    /// Returns true if nothing has been typed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Clears the operand
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The operand text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the text as a decimal `f64`
    pub fn parse(&self) -> CalcResult<f64> {
        parse_operand(&self.0)
    }
}

impl AsRef<str> for Operand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses operand text as a decimal `f64`.
///
/// Follows `str::parse::<f64>`: `"5."` and `".5"` are accepted, `"."` and
/// the empty string are not.
pub(crate) fn parse_operand(text: &str) -> CalcResult<f64> {
    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand(text.to_string()))
}
