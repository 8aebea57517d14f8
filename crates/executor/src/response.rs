//! Responses returned to the ledger environment.
//!
//! A response is either a success carrying payload bytes or an error
//! carrying a message. There is no partial success.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Status code reported for a successful invocation
pub const STATUS_OK: u16 = 200;

/// Status code reported for a failed invocation
pub const STATUS_ERROR: u16 = 500;

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// The invocation succeeded
    Success {
        /// Payload bytes (possibly empty)
        payload: Vec<u8>,
    },
    /// The invocation failed
    Error {
        /// Human-readable failure message
        message: String,
    },
}

impl Response {
    /// Successful response with the given payload
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Response::Success {
            payload: payload.into(),
        }
    }

    /// Error response with the given message
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }

    /// Environment status code: 200 on success, 500 on error
    pub fn status(&self) -> u16 {
        match self {
            Response::Success { .. } => STATUS_OK,
            Response::Error { .. } => STATUS_ERROR,
        }
    }

    /// Whether this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    /// Payload bytes of a success response
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Response::Success { payload } => Some(payload),
            Response::Error { .. } => None,
        }
    }

    /// Payload of a success response decoded as UTF-8 (lossy)
    pub fn payload_text(&self) -> Option<Cow<'_, str>> {
        self.payload().map(String::from_utf8_lossy)
    }

    /// Message of an error response
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success { .. } => None,
            Response::Error { message } => Some(message),
        }
    }
}

impl From<Result<Vec<u8>>> for Response {
    fn from(result: Result<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(e) => Response::error(e.to_string()),
        }
    }
}
