//! Keypad driver layer.
//!
//! Sits between button input and the calculator engine:
//! - Maps button labels to `KeyPress` events
//! - Gates fresh digit entry after an equals press until an operator
//!   or clear interrupts

mod keys;
mod panel;

pub use keys::KeyPress;
pub use panel::Keypad;
