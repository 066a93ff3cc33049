//! Input normalizer: translates raw key names into the calculator's
//! action vocabulary
//!
//! Keys outside the vocabulary map to `None` and are ignored by
//! callers. Double-decimal rejection is not handled here: the operand
//! accumulator guards it centrally so pointer and keyboard input behave
//! identically.

use crate::core::Operation;

/// The action vocabulary consumed by the evaluation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit press, 0..=9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// A binary operator press
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset to the cleared state
    Clear,
}

impl Action {
    /// Maps a keyboard key name to an action.
    ///
    /// `Enter`/`=` evaluate, `Backspace`/`Clear` clear, `+ - * / ^`
    /// select operators, `.` starts decimal entry, digits enter digits.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Equals),
            "Backspace" | "Clear" => Some(Self::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Maps a single character to an action
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match c {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            _ => Operation::from_symbol(c).map(Self::Operator),
        }
    }
}
