use thiserror::Error;

/// Errors surfaced at construction or call boundaries.
///
/// Every operation in this crate is a pure, immediate computation, so all
/// errors are argument-validation failures; there is no retry or recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TluError {
    #[error("signal value must be 0 or 1, got {0}")]
    NonBinaryValue(u8),

    #[error("decoder requires at least one example vector")]
    EmptyTruthSet,

    #[error("vector length mismatch: expected {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("arity mismatch: expected {expected} arguments, got {found}")]
    ArityMismatch { expected: usize, found: usize },
}
