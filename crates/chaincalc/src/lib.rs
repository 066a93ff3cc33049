//! chaincalc - a single-display calculator engine
//!
//! Keystrokes accumulate into operands, chained binary operators apply
//! eagerly left to right (no precedence), and the display text stays in
//! lockstep with the machine state. Results follow IEEE 754: division
//! by zero shows `Infinity`, never an error.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in ["3", "+", "4", "*", "2", "Enter"] {
//!     if let Some(action) = Action::from_key(key) {
//!         calc.press(action);
//!     }
//! }
//! // Eager left-to-right: (3 + 4) * 2, not 3 + (4 * 2).
//! assert_eq!(calc.total(), 14.0);
//! assert_eq!(calc.display(), "14");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod input;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::display::{format_value, Screen, TextScreen};
    pub use crate::core::operand::{anchored_whole, OperandAccumulator};
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{CalcError, CalcResult, Calculator, Operation};
    pub use crate::input::Action;

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction};
}
