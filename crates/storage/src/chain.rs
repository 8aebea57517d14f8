//! Per-key version chain
//!
//! Every commit that touches a key appends one [`KeyModification`].
//! Entries are stored oldest-first, which is also the order history
//! queries report them in. Entries are never rewritten or removed.

use shipledger_core::{KeyModification, Timestamp, TxId};

/// Append-only history of one key
#[derive(Debug, Clone, Default)]
pub struct VersionChain {
    /// Committed versions, oldest first
    versions: Vec<KeyModification>,
}

impl VersionChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a version that wrote `value`
    pub fn push_write(&mut self, tx_id: TxId, value: Vec<u8>, timestamp: Timestamp) {
        self.versions
            .push(KeyModification::write(tx_id, value, timestamp));
    }

    /// Append a tombstone
    pub fn push_delete(&mut self, tx_id: TxId, timestamp: Timestamp) {
        self.versions.push(KeyModification::delete(tx_id, timestamp));
    }

    /// Current value, `None` if never written or deleted by the newest version
    pub fn current(&self) -> Option<&[u8]> {
        self.versions.last().and_then(|v| v.value.as_deref())
    }

    /// Number of committed versions
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// All committed versions, oldest first
    pub fn history(&self) -> &[KeyModification] {
        &self.versions
    }
}
