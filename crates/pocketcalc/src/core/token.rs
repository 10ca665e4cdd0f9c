//! Button tokens delivered by the presentation layer

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operation};

/// One discrete button press.
///
/// The set is closed: digits, the decimal point, four operators, equals and
/// clear. Parsing from characters happens at the front-end boundary; the
/// state machine only ever sees valid tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonToken {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// One of the four operators
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Full reset
    Clear,
}

impl ButtonToken {
    /// Every token, in keypad reading order
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut tokens: Vec<Self> = (0..=9).map(Self::Digit).collect();
        tokens.push(Self::Decimal);
        tokens.extend(Operation::ALL.into_iter().map(Self::Operator));
        tokens.push(Self::Equals);
        tokens.push(Self::Clear);
        tokens
    }

    /// The character printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Operator(op) => op.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }

    /// Returns true for digit tokens
    #[must_use]
    pub const fn is_digit(&self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

impl TryFrom<char> for ButtonToken {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if let Some(d) = c.to_digit(10) {
            return Ok(Self::Digit(d as u8));
        }
        if let Some(op) = Operation::from_symbol(c) {
            return Ok(Self::Operator(op));
        }
        match c {
            '.' => Ok(Self::Decimal),
            '=' => Ok(Self::Equals),
            'C' => Ok(Self::Clear),
            other => Err(CalcError::UnknownToken(other)),
        }
    }
}

impl FromStr for ButtonToken {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            (Some(c), Some(_)) => Err(CalcError::UnknownToken(c)),
            (None, _) => Err(CalcError::UnknownToken(' ')),
        }
    }
}

impl std::fmt::Display for ButtonToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses a press sequence such as `"12+3="`, skipping whitespace
pub fn parse_sequence(sequence: &str) -> CalcResult<Vec<ButtonToken>> {
    sequence
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(ButtonToken::try_from)
        .collect()
}
