//! Two-line display snapshot.

use serde::{Deserialize, Serialize};

use crate::display::format_for_display;
use crate::engine::Calculator;

/// What a display layer renders after each key press.
///
/// The calculator exposes no rendering of its own; a UI copies these
/// two strings into its primary and secondary readouts verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    /// Formatted value being typed (or just computed). `"Error"` when
    /// the last computation produced a non-finite value.
    pub primary: String,
    /// Captured operand and pending operator, e.g. `"1,000 ×"`. Empty
    /// when no operator is pending.
    pub pending: String,
}

impl Readout {
    /// Snapshot the calculator's display state.
    pub fn of(calc: &Calculator) -> Self {
        if calc.error().is_some() {
            return Self {
                primary: "Error".to_string(),
                pending: String::new(),
            };
        }

        let primary = format_for_display(calc.current_operand());

        let pending = match calc.operation() {
            Some(op) => {
                let previous = format_for_display(calc.previous_operand());
                if previous.is_empty() {
                    String::new()
                } else {
                    format!("{} {}", previous, op.symbol())
                }
            }
            None => String::new(),
        };

        Self { primary, pending }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    fn type_str(calc: &mut Calculator, input: &str) {
        for c in input.chars() {
            calc.append_symbol(c);
        }
    }

    #[test]
    fn test_empty_calculator() {
        let readout = Readout::of(&Calculator::new());
        assert_eq!(readout.primary, "");
        assert_eq!(readout.pending, "");
    }

    #[test]
    fn test_primary_is_formatted() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "1234567.5");
        let readout = Readout::of(&calc);
        assert_eq!(readout.primary, "1,234,567.5");
        assert_eq!(readout.pending, "");
    }

    #[test]
    fn test_pending_line_shows_operand_and_symbol() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "1000");
        calc.choose_operator(Operator::Multiply);
        let readout = Readout::of(&calc);
        assert_eq!(readout.primary, "");
        assert_eq!(readout.pending, "1,000 ×");
    }

    #[test]
    fn test_pending_line_empty_after_compute() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "3");
        calc.choose_operator(Operator::Add);
        type_str(&mut calc, "5");
        calc.compute();
        let readout = Readout::of(&calc);
        assert_eq!(readout.primary, "8");
        assert_eq!(readout.pending, "");
    }

    #[test]
    fn test_error_readout() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "5");
        calc.choose_operator(Operator::Divide);
        type_str(&mut calc, "0");
        calc.compute();
        let readout = Readout::of(&calc);
        assert_eq!(readout.primary, "Error");
        assert_eq!(readout.pending, "");
    }

    #[test]
    fn test_serializes_to_json() {
        let mut calc = Calculator::new();
        type_str(&mut calc, "42");
        let json = serde_json::to_string(&Readout::of(&calc)).unwrap();
        assert_eq!(json, r#"{"primary":"42","pending":""}"#);
    }
}
