//! MemoryLedger: in-memory reference implementation of the ledger contract
//!
//! This module implements the `Ledger` trait using:
//! - `BTreeMap<String, VersionChain>` for byte-ordered keys with full history
//! - `parking_lot::RwLock` for thread-safe access
//! - A pluggable [`Clock`] for commit timestamps
//! - Random v4 UUIDs (simple form) as transaction ids
//!
//! # Design Notes
//!
//! - **One commit per call**: `put_state`, `put_states`, `put_states_if_absent`
//!   and `delete_state` each append exactly one version to every key they
//!   touch, all sharing one tx id and timestamp.
//! - **Guarded commits**: `put_states_if_absent` checks its guard key under
//!   the same write lock that applies the batch, so conflicting inserts
//!   serialize and only the first one lands.
//! - **Atomic batches**: a batch is validated first and then applied under a
//!   single write lock, so readers never observe half of it.
//! - **Snapshot queries**: range and history iterators copy their entries at
//!   open time and hold no lock while the caller iterates.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use shipledger_core::{
    Error, HistoryIterator, KeyValue, Ledger, RangeIterator, Result, Timestamp, TxId,
};

use crate::chain::VersionChain;
use crate::clock::{Clock, SystemClock};
use crate::iter::SnapshotIterator;
use crate::testing::{FaultInjector, FaultPoint};

/// Message returned when a caller writes the empty key
pub const EMPTY_KEY_MESSAGE: &str = "key must not be an empty string";

/// Versioned key-value ledger held entirely in memory
///
/// # Example
///
/// ```
/// use shipledger_core::Ledger;
/// use shipledger_storage::MemoryLedger;
///
/// let ledger = MemoryLedger::new();
/// ledger.put_state("ship1", b"{}".to_vec()).unwrap();
/// assert_eq!(ledger.get_state("ship1").unwrap(), Some(b"{}".to_vec()));
/// ```
pub struct MemoryLedger {
    /// Key -> append-only version chain
    state: RwLock<BTreeMap<String, VersionChain>>,
    clock: Arc<dyn Clock>,
    faults: Arc<FaultInjector>,
    /// Gauge of iterators not yet closed
    open_iterators: Arc<AtomicUsize>,
    /// Number of successful commits
    commits: AtomicU64,
}

impl MemoryLedger {
    /// Create an empty ledger stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty ledger stamped by `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(BTreeMap::new()),
            clock,
            faults: Arc::new(FaultInjector::new()),
            open_iterators: Arc::new(AtomicUsize::new(0)),
            commits: AtomicU64::new(0),
        }
    }

    /// Fault injector consulted by every operation
    pub fn faults(&self) -> &FaultInjector {
        &self.faults
    }

    /// Number of range/history iterators currently open
    pub fn open_iterators(&self) -> usize {
        self.open_iterators.load(Ordering::SeqCst)
    }

    /// Number of commits applied so far
    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::SeqCst)
    }

    /// Number of versions recorded for `key`
    pub fn version_count(&self, key: &str) -> usize {
        self.state
            .read()
            .get(key)
            .map_or(0, VersionChain::version_count)
    }

    /// Delete a key, recording a tombstone in its history
    ///
    /// Returns `true` if the key had a current value. Deleting an absent
    /// key commits nothing.
    ///
    /// # Errors
    ///
    /// Returns an error for the empty key or an injected write fault.
    pub fn delete_state(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        self.faults.check(FaultPoint::Put)?;

        let mut state = self.state.write();
        let Some(chain) = state.get_mut(key).filter(|c| c.current().is_some()) else {
            return Ok(false);
        };
        let (tx_id, timestamp) = self.next_commit();
        chain.push_delete(tx_id.clone(), timestamp);
        debug!(key, %tx_id, "deleted state");
        Ok(true)
    }

    /// Allocate the tx id and timestamp for a new commit
    fn next_commit(&self) -> (TxId, Timestamp) {
        self.commits.fetch_add(1, Ordering::SeqCst);
        let tx_id = TxId::new(Uuid::new_v4().simple().to_string());
        (tx_id, self.clock.now())
    }

    /// Apply a batch under one write lock
    ///
    /// With a guard key, the batch is dropped (returning `false`) when that
    /// key holds a current value at the moment the lock is taken.
    fn commit(&self, guard: Option<&str>, writes: Vec<(String, Vec<u8>)>) -> Result<bool> {
        for (key, _) in &writes {
            validate_key(key)?;
        }
        self.faults.check(FaultPoint::Put)?;

        let mut state = self.state.write();
        if let Some(guard) = guard {
            if state.get(guard).and_then(VersionChain::current).is_some() {
                debug!(guard, "guarded commit skipped, key present");
                return Ok(false);
            }
        }
        if writes.is_empty() {
            return Ok(true);
        }

        let (tx_id, timestamp) = self.next_commit();
        let keys = writes.len();
        for (key, value) in writes {
            state
                .entry(key)
                .or_default()
                .push_write(tx_id.clone(), value, timestamp);
        }
        debug!(%tx_id, keys, "committed writes");
        Ok(true)
    }

    fn snapshot_iterator<T: Send>(&self, entries: Vec<T>) -> SnapshotIterator<T> {
        SnapshotIterator::new(
            entries,
            Arc::clone(&self.open_iterators),
            Arc::clone(&self.faults),
        )
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLedger")
            .field("keys", &self.state.read().len())
            .field("commits", &self.commit_count())
            .field("open_iterators", &self.open_iterators())
            .finish()
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::storage(EMPTY_KEY_MESSAGE));
    }
    Ok(())
}

impl Ledger for MemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.faults.check(FaultPoint::Get)?;
        let state = self.state.read();
        Ok(state
            .get(key)
            .and_then(VersionChain::current)
            .map(<[u8]>::to_vec))
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.put_states(vec![(key.to_string(), value)])
    }

    fn put_states(&self, writes: Vec<(String, Vec<u8>)>) -> Result<()> {
        self.commit(None, writes).map(|_| ())
    }

    fn put_states_if_absent(
        &self,
        guard_key: &str,
        writes: Vec<(String, Vec<u8>)>,
    ) -> Result<bool> {
        validate_key(guard_key)?;
        self.commit(Some(guard_key), writes)
    }

    fn state_by_range(&self, start_key: &str, end_key: &str) -> Result<RangeIterator<'_>> {
        self.faults.check(FaultPoint::Range)?;

        let lower = if start_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start_key)
        };
        let upper = if end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end_key)
        };

        // BTreeMap::range panics on an inverted range
        let inverted = !start_key.is_empty() && !end_key.is_empty() && start_key >= end_key;
        let entries: Vec<KeyValue> = if inverted {
            Vec::new()
        } else {
            let state = self.state.read();
            state
                .range::<str, _>((lower, upper))
                .filter_map(|(key, chain)| chain.current().map(|v| KeyValue::new(key.clone(), v)))
                .collect()
        };

        Ok(Box::new(self.snapshot_iterator(entries)))
    }

    fn history_for_key(&self, key: &str) -> Result<HistoryIterator<'_>> {
        self.faults.check(FaultPoint::History)?;
        let entries = self
            .state
            .read()
            .get(key)
            .map(|chain| chain.history().to_vec())
            .unwrap_or_default();
        Ok(Box::new(self.snapshot_iterator(entries)))
    }
}
