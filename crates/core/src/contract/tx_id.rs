//! Transaction identifier assigned by the ledger

use serde::{Deserialize, Serialize};

/// Opaque identifier of the transaction that committed a version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    /// Wrap an identifier produced by the ledger
    pub fn new(id: impl Into<String>) -> Self {
        TxId(id.into())
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TxId {
    fn from(id: String) -> Self {
        TxId(id)
    }
}

impl From<&str> for TxId {
    fn from(id: &str) -> Self {
        TxId(id.to_string())
    }
}
