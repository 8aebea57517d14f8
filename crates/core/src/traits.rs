//! Ledger collaborator traits
//!
//! The ledger is the external environment that stores state durably,
//! orders transactions and keeps per-key history. This module defines
//! exactly what the record component needs from it, so a real ledger
//! binding and the in-memory reference ledger are interchangeable.

use crate::contract::{KeyModification, KeyValue};
use crate::error::Result;

/// A finite, ordered query result that holds ledger resources until closed
///
/// Implementations must tolerate `close` being called more than once.
/// After `close`, `next` returns `None`.
pub trait ResultsIterator<T>: Iterator<Item = Result<T>> + Send {
    /// Release the underlying cursor
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger fails to release the cursor.
    fn close(&mut self) -> Result<()>;
}

/// Boxed range-query iterator borrowed from a ledger
pub type RangeIterator<'a> = Box<dyn ResultsIterator<KeyValue> + 'a>;

/// Boxed history-query iterator borrowed from a ledger
pub type HistoryIterator<'a> = Box<dyn ResultsIterator<KeyModification> + 'a>;

/// Versioned key-value ledger
///
/// Thread safety: all methods take `&self`; implementations must be
/// safe to share across threads (requires Send + Sync).
pub trait Ledger: Send + Sync {
    /// Get the current value of a key
    ///
    /// Returns `None` if the key was never written or is deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be read.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write a single key
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Write several keys as one commit
    ///
    /// Either every write becomes visible or none does.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch is rejected; nothing is written then.
    fn put_states(&self, writes: Vec<(String, Vec<u8>)>) -> Result<()>;

    /// Write several keys as one commit, provided `guard_key` is absent
    ///
    /// The absence check and the commit form one step: of two racing calls
    /// guarded by the same key, at most one commits. Returns `false`, with
    /// nothing written, when `guard_key` already holds a current value.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch is rejected; nothing is written then.
    fn put_states_if_absent(
        &self,
        guard_key: &str,
        writes: Vec<(String, Vec<u8>)>,
    ) -> Result<bool>;

    /// Iterate current values with keys in `[start_key, end_key)`
    ///
    /// Keys are yielded in ascending byte order. An empty `start_key`
    /// means "from the first key", an empty `end_key` "to the last key".
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be opened.
    fn state_by_range(&self, start_key: &str, end_key: &str) -> Result<RangeIterator<'_>>;

    /// Iterate every committed version of a key, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be opened.
    fn history_for_key(&self, key: &str) -> Result<HistoryIterator<'_>>;
}
