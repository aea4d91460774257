//! The four arithmetic operators.

use std::fmt;

/// An arithmetic operation between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Look up an operator from its button symbol.
    ///
    /// Accepts the display symbols `×` and `÷` as well as the ASCII
    /// aliases `*` and `/`. Returns `None` for anything else.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The symbol shown on the keypad and in the pending readout line.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Apply the operation to two operands, producing the value the
    /// calculator stores.
    ///
    /// Multiplication and division are rounded to 8 decimal places so
    /// repeated operations don't accumulate float artifacts (`0.1 × 3`
    /// stays `0.3`). Addition and subtraction are left at full
    /// precision.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => round_8(lhs * rhs),
            Self::Divide => round_8(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Round to 8 decimal places.
fn round_8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}
