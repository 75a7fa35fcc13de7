//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition. The I/O error is wrapped
//! in `Arc` so that `AppError` stays cloneable.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// `--add` was given blank or whitespace-only text.
    #[error("Provide a non-empty quote.")]
    EmptyInput,

    /// `--remove` was given a position outside `1..=len`.
    #[error("Index out of range. Must be 1..{len}")]
    IndexOutOfRange { len: usize },

    /// A random pick or listing was requested but the store holds no quotes.
    #[error("No quotes found. Add one with --add.")]
    EmptyStore,

    /// Error related to reading or writing the storage file.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),
}

impl AppError {
    /// Returns true for errors caused by the user's request rather than the environment.
    ///
    /// These are reported as a plain message and do not fail the process.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, AppError::Io(_))
    }
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}
