//! Entries yielded by ledger queries
//!
//! - [`KeyValue`]: one current key/value pair from a range query
//! - [`KeyModification`]: one committed version from a history query

use serde::{Deserialize, Serialize};

use super::{Timestamp, TxId};

/// A current key/value pair, as produced by range iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Ledger key
    pub key: String,
    /// Raw stored bytes
    pub value: Vec<u8>,
}

impl KeyValue {
    /// Create a new key/value pair
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One committed version of a key
///
/// A deletion carries no value and has `is_delete` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModification {
    /// Transaction that committed this version
    pub tx_id: TxId,
    /// Stored bytes, `None` for a deletion
    pub value: Option<Vec<u8>>,
    /// Commit timestamp
    pub timestamp: Timestamp,
    /// Whether this version deleted the key
    pub is_delete: bool,
}

impl KeyModification {
    /// A version that wrote `value`
    pub fn write(tx_id: TxId, value: Vec<u8>, timestamp: Timestamp) -> Self {
        KeyModification {
            tx_id,
            value: Some(value),
            timestamp,
            is_delete: false,
        }
    }

    /// A version that deleted the key
    pub fn delete(tx_id: TxId, timestamp: Timestamp) -> Self {
        KeyModification {
            tx_id,
            value: None,
            timestamp,
            is_delete: true,
        }
    }
}
