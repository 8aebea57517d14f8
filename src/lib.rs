//! shipledger - versioned shipment records over an append-only ledger
//!
//! A shipment is fourteen opaque string fields stored under a caller-chosen
//! key. Five operations (`set`, `edit`, `get`, `getAll`, `getHist`) are
//! dispatched by name with positional string arguments, the way a ledger
//! environment invokes a contract.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use shipledger::{Executor, MemoryLedger};
//!
//! let executor = Executor::new(Arc::new(MemoryLedger::new()));
//!
//! let mut args = vec!["ship1".to_string()];
//! args.extend(std::iter::repeat("x".to_string()).take(14));
//! assert_eq!(executor.invoke("set", args).payload(), Some(&b"ship1"[..]));
//!
//! let last = executor.invoke("get", vec!["lastKey".into()]);
//! assert_eq!(last.payload(), Some(&b"ship1"[..]));
//! ```
//!
//! # Architecture
//!
//! All invocations go through the [`Executor`], which works over any
//! [`Ledger`]. [`MemoryLedger`] is the in-process reference ledger.

pub use shipledger_executor::*;

pub use shipledger_core::{
    codec, KeyModification, KeyValue, Ledger, ScopedIterator, Shipment, Timestamp, TxId,
};
pub use shipledger_storage::{Clock, ManualClock, MemoryLedger, SystemClock};

/// Fault injection for the reference ledger
pub mod testing {
    pub use shipledger_storage::testing::*;
}
