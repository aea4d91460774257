//! The keypad driver owning the result-finalized flag.

use tracing::trace;

use crate::display::Readout;
use crate::engine::Calculator;
use crate::keypad::KeyPress;

/// Drives a [`Calculator`] from key presses.
///
/// The calculator itself is UI-independent; the one piece of wiring
/// state lives here: after an equals press the result is *finalized*,
/// and digit entry stays blocked until an operator continues the chain
/// or a clear starts over.
#[derive(Clone, Debug, Default)]
pub struct Keypad {
    calculator: Calculator,
    finalized: bool,
}

impl Keypad {
    /// Create a keypad with a fresh calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The calculator behind the keypad.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Whether the last equals press finalized a result.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Apply one key press.
    pub fn press(&mut self, key: KeyPress) {
        trace!(?key, finalized = self.finalized, "key press");
        match key {
            KeyPress::Digit(digit) => {
                if !self.finalized {
                    self.calculator.append_symbol(digit);
                }
            }
            KeyPress::Decimal => {
                if !self.finalized {
                    self.calculator.append_symbol('.');
                }
            }
            KeyPress::Operator(op) => {
                // An operator resumes entry, chaining from the result
                self.finalized = false;
                self.calculator.choose_operator(op);
            }
            KeyPress::Equals => {
                self.finalized = true;
                self.calculator.compute();
            }
            KeyPress::Clear => {
                self.finalized = false;
                self.calculator.clear();
            }
            KeyPress::Delete => {
                if self.finalized {
                    // DEL on a finalized result wipes it entirely
                    self.finalized = false;
                    self.calculator.clear();
                } else {
                    self.calculator.delete_last_char();
                }
            }
        }
    }

    /// Snapshot the display state after the presses so far.
    pub fn readout(&self) -> Readout {
        Readout::of(&self.calculator)
    }
}
