//! Query iterators over ledger snapshots
//!
//! Range and history queries copy their entries out under the read lock,
//! so an open iterator never blocks writers. Each iterator counts itself in
//! the ledger's open-iterator gauge until closed (or dropped).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::vec::IntoIter;

use shipledger_core::{ResultsIterator, Result};

use crate::testing::{FaultInjector, FaultPoint};

/// Iterator over entries captured at query time
pub struct SnapshotIterator<T> {
    entries: IntoIter<T>,
    open: Arc<AtomicUsize>,
    faults: Arc<FaultInjector>,
    closed: bool,
}

impl<T> SnapshotIterator<T> {
    pub(crate) fn new(entries: Vec<T>, open: Arc<AtomicUsize>, faults: Arc<FaultInjector>) -> Self {
        open.fetch_add(1, Ordering::SeqCst);
        Self {
            entries: entries.into_iter(),
            open,
            faults,
            closed: false,
        }
    }

    fn release(&mut self) {
        if !self.closed {
            self.closed = true;
            self.open.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl<T> Iterator for SnapshotIterator<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }
        let entry = self.entries.next()?;
        Some(self.faults.check(FaultPoint::Next).map(|()| entry))
    }
}

impl<T: Send> ResultsIterator<T> for SnapshotIterator<T> {
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.release();
        self.faults.check(FaultPoint::Close)
    }
}

impl<T> Drop for SnapshotIterator<T> {
    fn drop(&mut self) {
        self.release();
    }
}
