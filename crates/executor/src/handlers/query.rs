//! Range and history query handlers.
//!
//! Both handlers wrap the ledger cursor in a [`ScopedIterator`], so the
//! cursor is closed whether collection succeeds or stops at an error.

use shipledger_core::{Ledger, ScopedIterator};
use tracing::debug;

use crate::{Output, Result};

/// Handle `GetAll`: current values for keys in `[start_key, end_key)`.
pub fn range<L: Ledger + ?Sized>(ledger: &L, start_key: &str, end_key: &str) -> Result<Output> {
    let entries = ScopedIterator::new(ledger.state_by_range(start_key, end_key)?).drain()?;
    debug!(start_key, end_key, entries = entries.len(), "range query");
    Ok(Output::Range(entries))
}

/// Handle `GetHist`: every committed version of `key`, oldest first.
pub fn history<L: Ledger + ?Sized>(ledger: &L, key: &str) -> Result<Output> {
    let entries = ScopedIterator::new(ledger.history_for_key(key)?).drain()?;
    debug!(key, versions = entries.len(), "history query");
    Ok(Output::History(entries))
}
