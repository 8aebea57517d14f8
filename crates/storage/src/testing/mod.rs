//! Testing utilities for the reference ledger
//!
//! - **Faults**: one-shot failures injected into individual ledger operations
//!
//! # Example
//!
//! ```
//! use shipledger_core::Ledger;
//! use shipledger_storage::testing::FaultPoint;
//! use shipledger_storage::MemoryLedger;
//!
//! let ledger = MemoryLedger::new();
//! ledger.faults().arm(FaultPoint::Get, "peer unavailable");
//! assert!(ledger.get_state("ship1").is_err());
//! ```

mod faults;

pub use faults::{FaultInjector, FaultPoint};
