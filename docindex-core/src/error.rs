//! Error types for docindex operations.
//!
//! Only whole-request failures live here. A single identifier that cannot be
//! stored or removed is reported in the `failed` list of the response instead.

use thiserror::Error;

/// Result type alias using docindex's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during index operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A get or delete request named no identifiers and the backend only
    /// supports identifier-based operation.
    #[error("must provide ids to {operation}")]
    MissingIds { operation: &'static str },

    /// Two positional inputs of an upsert differ in length.
    #[error("length mismatch: expected {expected} {what}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A blocking task could not be scheduled or never completed.
    #[error("executor error: {0}")]
    Executor(String),

    /// The backend could not produce any response for the request.
    #[error("backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Returns true for errors caused by the shape of the caller's request.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::MissingIds { .. } | Error::LengthMismatch { .. })
    }
}
