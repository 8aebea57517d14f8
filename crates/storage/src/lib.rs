//! Reference ledger for shipledger
//!
//! This crate implements the `Ledger` contract in memory:
//! - MemoryLedger: BTreeMap of per-key version chains behind an RwLock
//! - VersionChain: append-only history including tombstones
//! - SnapshotIterator: range/history cursors with open-iterator accounting
//! - Clock: pluggable commit timestamps (system or manual)
//! - testing: fault injection for every ledger operation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod clock;
pub mod iter;
pub mod memory;
pub mod testing;

pub use chain::VersionChain;
pub use clock::{Clock, ManualClock, SystemClock};
pub use iter::SnapshotIterator;
pub use memory::{MemoryLedger, EMPTY_KEY_MESSAGE};
