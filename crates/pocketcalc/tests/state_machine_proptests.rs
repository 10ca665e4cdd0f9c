//! Property-based tests for the calculator state machine
//!
//! Random token streams must never break the state invariants, whatever
//! order the buttons are pressed in.

use pocketcalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn token_strategy() -> impl Strategy<Value = ButtonToken> {
    prop_oneof![
        4 => digit_strategy().prop_map(ButtonToken::Digit),
        1 => Just(ButtonToken::Decimal),
        2 => operation_strategy().prop_map(ButtonToken::Operator),
        1 => Just(ButtonToken::Equals),
        1 => Just(ButtonToken::Clear),
    ]
}

/// Digits and decimal points only
fn entry_strategy() -> impl Strategy<Value = ButtonToken> {
    prop_oneof![
        4 => digit_strategy().prop_map(ButtonToken::Digit),
        1 => Just(ButtonToken::Decimal),
    ]
}

fn assert_invariants(calc: &CalculatorState) -> Result<(), TestCaseError> {
    let snap = calc.snapshot();

    prop_assert!(snap.first_operand.matches('.').count() <= 1);
    prop_assert!(snap.second_operand.matches('.').count() <= 1);

    if snap.operation.is_none() {
        prop_assert!(!snap.operator_selected);
    }
    if !snap.operator_selected {
        prop_assert!(snap.second_operand.is_empty());
    }

    match calc.mode() {
        Mode::EnteringFirst => {
            if !snap.first_operand.is_empty() {
                prop_assert_eq!(&snap.display, &snap.first_operand);
            }
        }
        Mode::EnteringSecond(_) => {
            prop_assert!(!snap.first_operand.is_empty());
            if !snap.second_operand.is_empty() {
                prop_assert_eq!(&snap.display, &snap.second_operand);
            }
        }
        Mode::ShowingResult => {
            prop_assert_eq!(&snap.display, &snap.last_result);
            prop_assert_eq!(&snap.display, &snap.first_operand);
        }
    }
    Ok(())
}

proptest! {
    /// Invariants hold after every press of any token stream
    #[test]
    fn prop_invariants_hold(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut calc = CalculatorState::new();
        assert_invariants(&calc)?;
        for token in tokens {
            calc.handle_press(token);
            assert_invariants(&calc)?;
        }
    }

    /// Without operators the display echoes what was typed, minus repeated
    /// decimal points
    #[test]
    fn prop_entry_echoes_typed_text(tokens in prop::collection::vec(entry_strategy(), 1..30)) {
        let mut calc = CalculatorState::new();
        let mut expected = String::new();
        for token in tokens {
            calc.handle_press(token);
            let c = token.label();
            if c != '.' || !expected.contains('.') {
                expected.push(c);
            }
            prop_assert_eq!(calc.current_display(), expected.as_str());
        }
    }

    /// Clear always returns to the initial state
    #[test]
    fn prop_clear_resets(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = CalculatorState::new();
        calc.handle_presses(tokens);
        calc.handle_press(ButtonToken::Clear);
        prop_assert_eq!(calc, CalculatorState::new());
    }

    /// A second `=` never changes anything
    #[test]
    fn prop_double_equals_idempotent(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = CalculatorState::new();
        calc.handle_presses(tokens);
        calc.handle_press(ButtonToken::Equals);
        let before = calc.clone();
        calc.handle_press(ButtonToken::Equals);
        prop_assert_eq!(calc, before);
    }

    /// Keypad entry of two integers followed by `=` matches the evaluator
    #[test]
    fn prop_single_operation_matches_evaluator(
        a in 0u32..100_000,
        b in 0u32..100_000,
        op in operation_strategy(),
    ) {
        let mut calc = CalculatorState::new();
        let sequence = format!("{a}{}{b}=", op.symbol());
        calc.handle_presses(parse_sequence(&sequence).unwrap());
        let expected = evaluate(&a.to_string(), op, &b.to_string());
        prop_assert_eq!(calc.current_display(), expected.as_str());
    }

    /// Chaining with an operator gives the same result as `=` then operator
    #[test]
    fn prop_chain_equals_stepwise(
        a in 1u32..1000,
        b in 1u32..1000,
        c in 1u32..1000,
        op1 in operation_strategy(),
        op2 in operation_strategy(),
    ) {
        let chained = format!("{a}{}{b}{}{c}=", op1.symbol(), op2.symbol());
        let stepwise = format!("{a}{}{b}={}{c}=", op1.symbol(), op2.symbol());

        let mut left = CalculatorState::new();
        left.handle_presses(parse_sequence(&chained).unwrap());
        let mut right = CalculatorState::new();
        right.handle_presses(parse_sequence(&stepwise).unwrap());

        prop_assert_eq!(left.current_display(), right.current_display());
    }
}

// ===== Fixed scenarios =====

#[test]
fn scenario_documented_sequences() {
    let cases = [
        ("1+2=", "3.0"),
        ("4+2+3=", "9.0"),
        ("5..2", "5.2"),
        ("6/3=", "2.0"),
        ("5/0=", "Error"),
        ("5/0+3=", "Error"),
        ("5/0=+2=", "Error"),
        ("5/0=3+4=", "7.0"),
        ("12C", "0"),
        ("7*6==", "42.0"),
    ];
    for (sequence, expected) in cases {
        let mut calc = CalculatorState::new();
        calc.handle_presses(parse_sequence(sequence).unwrap());
        assert_eq!(calc.current_display(), expected, "sequence {sequence:?}");
    }
}

#[test]
fn scenario_error_is_kept_as_first_operand() {
    let mut calc = CalculatorState::new();
    calc.handle_presses(parse_sequence("5/0=").unwrap());
    let snap = calc.snapshot();
    assert_eq!(snap.display, ERROR_DISPLAY);
    assert_eq!(snap.first_operand, ERROR_DISPLAY);
    assert_eq!(snap.last_result, ERROR_DISPLAY);
    assert_eq!(snap.operation, None);

    calc.handle_press(ButtonToken::Operator(Operation::Multiply));
    let snap = calc.snapshot();
    assert_eq!(snap.operation, Some(Operation::Multiply));
    assert!(snap.operator_selected);
    assert_eq!(snap.first_operand, ERROR_DISPLAY);
}

#[test]
fn scenario_clear_then_fresh_entry_has_no_residue() {
    let mut calc = CalculatorState::new();
    calc.handle_presses(parse_sequence("8*7+").unwrap());
    calc.handle_press(ButtonToken::Clear);
    calc.handle_presses(parse_sequence("2=").unwrap());
    assert_eq!(calc.current_display(), "2");
    assert_eq!(calc.snapshot().operation, None);
}
