//! Store error types.

use thiserror::Error;

/// Errors that can occur during document store operations.
///
/// The API layer treats these as opaque failures: it picks a 5xx status and
/// never exposes the message to clients.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("Document {id} has invalid field '{field}': expected {expected}")]
    Decode {
        id: String,
        field: String,
        expected: &'static str,
    },

    #[error("Document store operation failed: {0}")]
    Operation(String),
}

impl StoreError {
    pub fn decode(id: impl Into<String>, field: impl Into<String>, expected: &'static str) -> Self {
        Self::Decode {
            id: id.into(),
            field: field.into(),
            expected,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
