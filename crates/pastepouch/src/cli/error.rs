use thiserror::Error;

use pastepouch_core::projection::ProjectionError;
use pastepouch_core::storage::RepositoryError;

/// Errors raised while driving the interactive menu.
///
/// Only [`CliError::Io`] ends the loop; everything else is printed and the
/// menu is shown again.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown choice '{0}', pick a number from 1 to 9")]
    UnknownChoice(String),
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

impl CliError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Io(_))
    }
}
