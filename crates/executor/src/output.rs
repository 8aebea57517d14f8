//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. Outputs are typed;
//! turning them into response bytes is the formatter's job.

use serde::{Deserialize, Serialize};
use shipledger_core::{KeyModification, KeyValue};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// A new shipment was stored under `key` (from `set`)
    Inserted {
        /// Key of the inserted record
        key: String,
    },

    /// A shipment was written under `key` (from `edit`)
    Written {
        /// Key of the written record
        key: String,
    },

    /// Raw stored bytes, or `None` if the key holds nothing (from `get`)
    Value(Option<Vec<u8>>),

    /// Current key/value pairs in key order (from `getAll`)
    Range(Vec<KeyValue>),

    /// Committed versions, oldest first (from `getHist`)
    History(Vec<KeyModification>),
}

impl Output {
    /// Key written by a `set` or `edit`, if this is a write result
    pub fn written_key(&self) -> Option<&str> {
        match self {
            Output::Inserted { key } | Output::Written { key } => Some(key),
            _ => None,
        }
    }
}
