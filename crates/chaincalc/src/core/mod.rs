//! Calculator core: operation registry, operand accumulator, evaluation
//! state machine and display formatting.
//!
//! The core is a single-threaded, event-driven state machine. Every
//! transition is synchronous and total; invalid numeric results surface
//! as `Infinity`/`NaN` display text, never as errors.

pub mod display;
pub mod machine;
pub mod operand;
mod operations;
pub mod tape;

pub use machine::Calculator;
pub use operations::Operation;

use thiserror::Error;

/// Result type for registry lookups
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The machine has no user-reachable failure states. The only error
/// class is a contract violation by an input source: an operator
/// identifier outside the registry vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Operator identifier not present in the registry
    #[error("invalid operator identifier: {0:?}")]
    InvalidOperator(String),
}
