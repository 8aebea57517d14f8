//! Error types for the ledger-facing layer
//!
//! Everything below the executor reports failures through [`Error`].
//! We use `thiserror` for the `Display` and `Error` implementations.

use thiserror::Error;

/// Result type alias for core and ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the ledger collaborator and the record codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Ledger access failure. The message is reported verbatim.
    #[error("{0}")]
    Storage(String),

    /// Record could not be encoded or decoded
    #[error("codec error: {0}")]
    Codec(String),
}

impl Error {
    /// Build a storage error from any message
    pub fn storage(message: impl Into<String>) -> Self {
        Error::Storage(message.into())
    }

    /// Build a codec error from any message
    pub fn codec(message: impl Into<String>) -> Self {
        Error::Codec(message.into())
    }

    /// True for failures raised by the ledger itself
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Codec(e.to_string())
    }
}
