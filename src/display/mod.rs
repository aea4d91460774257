//! Display formatting for calculator output.
//!
//! This module provides:
//! - Thousand-separator formatting for operand text
//! - The `Readout` snapshot a display layer renders verbatim

mod format;
mod readout;

pub use format::format_for_display;
pub use readout::Readout;
