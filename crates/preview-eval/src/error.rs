//! Fatal evaluation errors.

use thiserror::Error;

/// A failure that stops an interpreter run.
///
/// Unsupported lines and unparseable literals are not errors; they are
/// skipped or kept as raw text. Only exhausted limits and internal faults
/// end a run early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// More statements were evaluated than the gas limit allows.
    #[error("gas exhausted after {limit} steps")]
    GasExhausted { limit: u64 },

    /// The program printed more entries than allowed.
    #[error("output limit of {limit} entries exceeded")]
    OutputLimitExceeded { limit: usize },

    /// An unexpected fault inside the interpreter itself.
    #[error("internal interpreter error: {0}")]
    Internal(String),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
