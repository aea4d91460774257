//! Four-function keypad calculator engine.
//!
//! The crate is split into three layers:
//! - [`engine`]: the calculator state machine (operand entry, operator
//!   chaining, computation)
//! - [`display`]: formatting and the two-line readout a UI renders
//! - [`keypad`]: the driver layer mapping button presses onto the
//!   engine and gating entry after a finalized result
//!
//! ```
//! use tallypad::{KeyPress, Keypad};
//!
//! let mut keypad = Keypad::new();
//! for label in ["3", "+", "5", "×", "2", "="] {
//!     keypad.press(KeyPress::from_label(label).unwrap());
//! }
//! assert_eq!(keypad.readout().primary, "16");
//! ```

pub mod display;
pub mod engine;
pub mod keypad;

pub use display::{Readout, format_for_display};
pub use engine::{Calculator, ComputeError, Operator};
pub use keypad::{KeyPress, Keypad};
