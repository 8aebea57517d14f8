//! Fault injection for ledger operations
//!
//! A [`FaultInjector`] holds at most one armed fault per [`FaultPoint`].
//! A fault fires once, after an optional number of successful passes, and
//! surfaces as a storage error carrying the armed message.

use std::collections::HashMap;

use parking_lot::Mutex;
use shipledger_core::{Error, Result};

/// Ledger operations that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultPoint {
    /// Point read
    Get,
    /// Single or batch write
    Put,
    /// Opening a range query
    Range,
    /// Opening a history query
    History,
    /// Advancing any open iterator
    Next,
    /// Closing any open iterator
    Close,
}

impl FaultPoint {
    /// Get all fault points
    pub fn all() -> [FaultPoint; 6] {
        [
            FaultPoint::Get,
            FaultPoint::Put,
            FaultPoint::Range,
            FaultPoint::History,
            FaultPoint::Next,
            FaultPoint::Close,
        ]
    }
}

#[derive(Debug)]
struct Armed {
    skip: usize,
    message: String,
}

/// One-shot failures keyed by operation
#[derive(Debug, Default)]
pub struct FaultInjector {
    armed: Mutex<HashMap<FaultPoint, Armed>>,
}

impl FaultInjector {
    /// Create an injector with nothing armed
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next pass through `point`
    pub fn arm(&self, point: FaultPoint, message: impl Into<String>) {
        self.arm_after(point, 0, message);
    }

    /// Let `skip` passes through `point` succeed, then fail the next one
    pub fn arm_after(&self, point: FaultPoint, skip: usize, message: impl Into<String>) {
        self.armed.lock().insert(
            point,
            Armed {
                skip,
                message: message.into(),
            },
        );
    }

    /// Disarm every fault
    pub fn clear(&self) {
        self.armed.lock().clear();
    }

    /// Whether a fault is still pending for `point`
    pub fn is_armed(&self, point: FaultPoint) -> bool {
        self.armed.lock().contains_key(&point)
    }

    /// Record a pass through `point`, failing if an armed fault is due
    pub fn check(&self, point: FaultPoint) -> Result<()> {
        let mut armed = self.armed.lock();
        let Some(fault) = armed.get_mut(&point) else {
            return Ok(());
        };
        if fault.skip > 0 {
            fault.skip -= 1;
            return Ok(());
        }
        let message = std::mem::take(&mut fault.message);
        armed.remove(&point);
        Err(Error::storage(message))
    }
}
