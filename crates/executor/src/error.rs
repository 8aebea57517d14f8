//! Error types for invocation handling.
//!
//! Every failure an invocation can produce is a variant of [`Error`]. The
//! `Display` text of an error is exactly the message carried by the error
//! response, so the variants' formats are part of the response contract.

use serde::{Deserialize, Serialize};

/// Invocation errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Boundary | `ArgumentCount`, `UnknownFunction`, `InvalidInvocation` | Rejected before any ledger access |
/// | Policy | `AlreadyExists`, `ReservedKey` | Write refused by the record lifecycle |
/// | System | `Storage`, `Serialization`, `Config` | Infrastructure failures |
///
/// # Example
///
/// ```ignore
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::AlreadyExists { key }) => println!("{} is taken", key),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Boundary Errors ====================
    /// Wrong number of positional arguments for an operation
    #[error("incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    ArgumentCount {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Operation name not recognized
    #[error("unknown function: {name}")]
    UnknownFunction { name: String },

    /// Invocation envelope could not be parsed
    #[error("invalid invocation: {reason}")]
    InvalidInvocation { reason: String },

    // ==================== Policy Errors ====================
    /// Insert targeted a key that already holds a value
    #[error("shipment already exists: {key}")]
    AlreadyExists { key: String },

    /// Write targeted the reserved last-key slot
    #[error("reserved key cannot hold a shipment: {key}")]
    ReservedKey { key: String },

    // ==================== System Errors ====================
    /// Ledger access failure, message forwarded verbatim
    #[error("{reason}")]
    Storage { reason: String },

    /// Record could not be encoded
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Configuration could not be loaded or is invalid
    #[error("config error: {reason}")]
    Config { reason: String },
}

impl From<shipledger_core::Error> for Error {
    fn from(err: shipledger_core::Error) -> Self {
        match err {
            shipledger_core::Error::Storage(reason) => Error::Storage { reason },
            shipledger_core::Error::Codec(reason) => Error::Serialization { reason },
        }
    }
}

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
