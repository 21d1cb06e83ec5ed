use thiserror::Error;

/// Errors raised while projecting a result set into records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Cannot decode {found} value in column '{column}' (row {row}) as {target}")]
    Coercion {
        column: String,
        row: usize,
        target: &'static str,
        found: &'static str,
    },
    #[error("Row {row} has {found} values but the result declares {expected} columns")]
    ArityMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Serialization error: {0}")]
    Serialization(String),
}
