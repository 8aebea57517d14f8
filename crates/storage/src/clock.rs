//! Commit clocks
//!
//! The ledger stamps each commit with a [`Timestamp`] taken from a
//! [`Clock`]. Tests use [`ManualClock`] to get reproducible history output.

use std::sync::atomic::{AtomicI64, Ordering};

use shipledger_core::Timestamp;

/// Source of commit timestamps
pub trait Clock: Send + Sync {
    /// Timestamp for the commit being applied now
    fn now(&self) -> Timestamp;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Deterministic clock that advances a fixed step per reading
///
/// Readings start at `start` and grow by `step_nanos` each call.
#[derive(Debug)]
pub struct ManualClock {
    next_nanos: AtomicI64,
    step_nanos: i64,
}

impl ManualClock {
    /// Clock starting at `start`, advancing one second per commit
    pub fn new(start: Timestamp) -> Self {
        Self::with_step(start, 1_000_000_000)
    }

    /// Clock starting at `start`, advancing `step_nanos` per commit
    pub fn with_step(start: Timestamp, step_nanos: i64) -> Self {
        let start_nanos = start
            .seconds()
            .saturating_mul(1_000_000_000)
            .saturating_add(start.nanos() as i64);
        Self {
            next_nanos: AtomicI64::new(start_nanos),
            step_nanos,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let nanos = self.next_nanos.fetch_add(self.step_nanos, Ordering::SeqCst);
        Timestamp::new(0, nanos)
    }
}
