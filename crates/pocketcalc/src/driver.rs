//! Calculator driver: write the behavioural check once, run it on every
//! front end.
//!
//! A [`CalculatorDriver`] is anything that accepts button tokens and shows a
//! display string. The bare [`CalculatorState`] is one; the terminal app is
//! another. The `verify_*` functions below drive any implementation through
//! the calculator's observable behaviour and panic on the first mismatch.

use crate::core::{parse_sequence, ButtonToken, CalcResult, CalculatorState, StateSnapshot};

/// Abstract front end for calculator interactions
pub trait CalculatorDriver {
    /// Delivers one button press
    fn press(&mut self, token: ButtonToken);

    /// Text currently on the display
    fn display(&self) -> String;

    /// Logical state behind the display
    fn snapshot(&self) -> StateSnapshot;

    /// Presses `C`
    fn clear(&mut self) {
        self.press(ButtonToken::Clear);
    }

    /// Presses every token of a sequence like `"12+3="`
    fn press_sequence(&mut self, sequence: &str) -> CalcResult<()> {
        for token in parse_sequence(sequence)? {
            self.press(token);
        }
        Ok(())
    }
}

impl CalculatorDriver for CalculatorState {
    fn press(&mut self, token: ButtonToken) {
        self.handle_press(token);
    }

    fn display(&self) -> String {
        self.current_display().to_string()
    }

    fn snapshot(&self) -> StateSnapshot {
        CalculatorState::snapshot(self)
    }
}

fn check<D: CalculatorDriver>(driver: &mut D, sequence: &str, expected: &str) {
    driver.clear();
    driver
        .press_sequence(sequence)
        .unwrap_or_else(|e| panic!("bad sequence {sequence:?}: {e}"));
    assert_eq!(driver.display(), expected, "after {sequence:?}");
}

/// Digits and the decimal point echo on the display as typed
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.display(), "0");

    let mut typed = String::new();
    for c in "3.1415".chars() {
        driver
            .press_sequence(&c.to_string())
            .unwrap_or_else(|e| panic!("bad token {c:?}: {e}"));
        typed.push(c);
        assert_eq!(driver.display(), typed);
    }

    check(driver, "5..2", "5.2");
}

/// One operation per `=`, default float rendering
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "1+2=", "3.0");
    check(driver, "10-4=", "6.0");
    check(driver, "6*7=", "42.0");
    check(driver, "6/3=", "2.0");
    check(driver, "0.1+0.2=", "0.30000000000000004");
}

/// A second operator evaluates what is pending, left to right
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("4+2+").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(driver.display(), "6.0");
    driver.press_sequence("3=").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(driver.display(), "9.0");

    check(driver, "2+3*4=", "20.0");
    check(driver, "1+2=*3=", "9.0");
}

/// Invalid sequences are silent no-ops
pub fn verify_ignored_input<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "+", "0");
    check(driver, "*5", "5");
    check(driver, "8=", "8");
    check(driver, "8+=", "8");

    driver.clear();
    driver.press_sequence("7*6=").unwrap_or_else(|e| panic!("{e}"));
    let before = driver.snapshot();
    driver.press(ButtonToken::Equals);
    assert_eq!(driver.snapshot(), before, "second = must be a no-op");
}

/// Failed evaluations show `Error`, which then poisons any chained
/// operation until a digit starts over
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "5/0=", "Error");
    check(driver, ".+1=", "Error");
    check(driver, "5/0+", "Error");
    check(driver, "5/0=+", "Error");
    check(driver, "5/0+3=", "Error");
    check(driver, "5/0=+2=", "Error");
    check(driver, "5/0=3+4=", "7.0");
}

/// `C` always returns to the initial state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let initial = driver.snapshot();
    for sequence in ["12", "12+", "12+3", "12+3=", "5/0="] {
        driver
            .press_sequence(sequence)
            .unwrap_or_else(|e| panic!("{e}"));
        driver.clear();
        assert_eq!(driver.snapshot(), initial, "after {sequence:?}C");
    }
    check(driver, "9*9C1+1=", "2.0");
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_ignored_input(driver);
    verify_error_handling(driver);
    verify_clear(driver);
}
