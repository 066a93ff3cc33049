//! Operation registry: maps operator identifiers to binary functions
//!
//! `equals` and `clear` are control actions handled by the state
//! machine; they are not arithmetic operators and are not listed here.

use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum - the full registry vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Exponentiation (^)
    Exponentiate,
}

impl Operation {
    /// All operations, in display order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Exponentiate,
    ];

    /// Applies the operator to two operands.
    ///
    /// Pure IEEE 754 arithmetic: division by zero yields an infinity or
    /// `NaN`, never an error.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Exponentiate => a.powf(b),
        }
    }

    /// Returns the operator symbol used in the display echo
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Exponentiate => '^',
        }
    }

    /// Returns the registry identifier for this operator
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Exponentiate => "exponentiate",
        }
    }

    /// Looks up an operator by its registry identifier.
    ///
    /// An unknown identifier is a contract violation by the caller, not
    /// a state the UI action vocabulary can reach.
    pub fn from_id(id: &str) -> CalcResult<Self> {
        match id {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            "exponentiate" => Ok(Self::Exponentiate),
            other => Err(CalcError::InvalidOperator(other.to_string())),
        }
    }

    /// Looks up an operator by its key symbol
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Exponentiate),
            _ => None,
        }
    }
}
