//! Property-based tests for the calculator engine.
//!
//! Uses proptest to verify the entry and computation invariants hold
//! for arbitrary operands.

use proptest::prelude::*;
use tallypad::{Calculator, Operator};

fn type_str(calc: &mut Calculator, input: &str) {
    for c in input.chars() {
        calc.append_symbol(c);
    }
}

fn operators() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

proptest! {
    /// Entering `a`, choosing an operator, entering `b`, then
    /// computing must match applying the operator to the parsed
    /// operands directly.
    #[test]
    fn prop_compute_matches_direct_application(
        a in 0.0..1_000_000.0f64,
        b in 0.001..1_000_000.0f64,
        op in operators(),
    ) {
        let a_text = a.to_string();
        let b_text = b.to_string();

        let mut calc = Calculator::new();
        type_str(&mut calc, &a_text);
        calc.choose_operator(op);
        type_str(&mut calc, &b_text);
        calc.compute();

        let expected = op.apply(a_text.parse().unwrap(), b_text.parse().unwrap());
        let stored: f64 = calc.current_operand().parse().unwrap();
        prop_assert_eq!(stored, expected);
        prop_assert_eq!(calc.previous_operand(), "");
        prop_assert!(calc.operation().is_none());
    }

    /// The current operand never holds more than one decimal point,
    /// no matter where extra points are injected.
    #[test]
    fn prop_at_most_one_decimal_point(
        digits in "[0-9.]{1,20}",
    ) {
        let mut calc = Calculator::new();
        type_str(&mut calc, &digits);
        let dots = calc.current_operand().matches('.').count();
        prop_assert!(dots <= 1, "operand {:?} has {} dots", calc.current_operand(), dots);
    }

    /// Deleting shrinks a non-empty operand by exactly one character
    /// and is a no-op on an empty one.
    #[test]
    fn prop_delete_removes_one_char(
        digits in "[0-9]{0,10}",
    ) {
        let mut calc = Calculator::new();
        type_str(&mut calc, &digits);
        let before = calc.current_operand().len();
        calc.delete_last_char();
        let after = calc.current_operand().len();
        prop_assert_eq!(after, before.saturating_sub(1));
    }

    /// Choosing an operator with nothing typed never changes state.
    #[test]
    fn prop_operator_on_empty_entry_is_noop(
        op in operators(),
    ) {
        let mut calc = Calculator::new();
        calc.choose_operator(op);
        prop_assert_eq!(calc.current_operand(), "");
        prop_assert_eq!(calc.previous_operand(), "");
        prop_assert!(calc.operation().is_none());
    }
}
