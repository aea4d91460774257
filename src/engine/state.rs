//! The calculator state machine.
//!
//! Operands are held as the raw text the user typed and only parsed
//! when a computation resolves. Every transition is a plain `&mut self`
//! method; invalid input is a silent no-op so the caller never has to
//! unwind a half-applied edit.

use thiserror::Error;
use tracing::debug;

use crate::engine::Operator;

/// A computation produced a value the display can't meaningfully show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NotFinite,
}

/// Mutable calculator state driven by discrete key events.
///
/// Holds the operand being typed, the operand captured behind a pending
/// operator, and the operator itself. `current_operand` contains at
/// most one decimal point; `operation` is set exactly when an operator
/// has been chosen and not yet resolved.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operator>,
    error: Option<ComputeError>,
}

impl Calculator {
    /// Create a calculator with empty operands and nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand currently being typed.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The operand captured before the pending operator. Empty when no
    /// operator is pending.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The pending operator, if one has been chosen.
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// The error from the last computation, if it produced a
    /// non-finite value. While set, every transition except [`clear`]
    /// is ignored.
    ///
    /// [`clear`]: Self::clear
    pub fn error(&self) -> Option<ComputeError> {
        self.error
    }

    /// Reset to the initial state: empty operands, no pending
    /// operator, no error.
    pub fn clear(&mut self) {
        self.current_operand.clear();
        self.previous_operand.clear();
        self.operation = None;
        self.error = None;
    }

    /// Remove the last typed character of the current operand.
    ///
    /// String-level truncation, not numeric rounding. No-op on an
    /// empty operand.
    pub fn delete_last_char(&mut self) {
        if self.error.is_some() {
            return;
        }
        self.current_operand.pop();
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// The symbol is concatenated as text, so leading zeros and
    /// partial input like `3.` survive until a computation parses
    /// them. Rejected silently when the symbol is a second decimal
    /// point or not a digit/point at all.
    pub fn append_symbol(&mut self, symbol: char) {
        if self.error.is_some() {
            return;
        }
        match symbol {
            '.' if self.current_operand.contains('.') => {}
            '.' => self.current_operand.push('.'),
            d if d.is_ascii_digit() => self.current_operand.push(d),
            _ => {}
        }
    }

    /// Record a pending operator, capturing the current operand.
    ///
    /// Choosing an operator while one is already pending first resolves
    /// the pending pair, so `3 + 5 × 2` means `(3 + 5) × 2` without an
    /// explicit equals between steps. Rejected silently when nothing
    /// has been typed yet.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.error.is_some() || self.current_operand.is_empty() {
            return;
        }

        if !self.previous_operand.is_empty() {
            self.compute();
            if self.error.is_some() {
                return;
            }
        }

        self.operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
    }

    /// Resolve the pending operator against the two operands.
    ///
    /// No-op when no operator is pending or either operand fails to
    /// parse as a number. On success the result becomes the current
    /// operand (as text) and the pending state is cleared, so the next
    /// digit starts a fresh entry while the next operator chains from
    /// the result.
    ///
    /// A non-finite result (division by zero, overflow) does not store
    /// `inf`/`NaN` text; it moves the calculator into an error state
    /// that only [`clear`] leaves.
    ///
    /// [`clear`]: Self::clear
    pub fn compute(&mut self) {
        if self.error.is_some() {
            return;
        }
        let Some(op) = self.operation else {
            return;
        };
        let Ok(prev) = self.previous_operand.parse::<f64>() else {
            return;
        };
        let Ok(current) = self.current_operand.parse::<f64>() else {
            return;
        };

        let result = op.apply(prev, current);
        if !result.is_finite() {
            let error = if op == Operator::Divide && current == 0.0 {
                ComputeError::DivisionByZero
            } else {
                ComputeError::NotFinite
            };
            debug!(%prev, %current, %op, %error, "computation failed");
            self.current_operand.clear();
            self.previous_operand.clear();
            self.operation = None;
            self.error = Some(error);
            return;
        }

        debug!(%prev, %current, %op, %result, "computed");
        self.current_operand = result.to_string();
        self.previous_operand.clear();
        self.operation = None;
    }
}
