use std::io;

use thiserror::Error;

/// Library-wide error type for pioclean operations.
///
/// Errors are never handled locally: every failure propagates to the CLI
/// boundary so the invoking build tool sees the abort.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure from an existence check or directory removal.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Cleanup target is not a safe project-relative path.
    #[error("Invalid cleanup target '{0}': must be a relative path without '..' components")]
    InvalidTarget(String),
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
