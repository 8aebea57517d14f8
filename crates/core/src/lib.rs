//! Core types and traits for shipledger
//!
//! This crate defines the foundational types used throughout the system:
//! - Shipment: the fourteen-field record stored under each key
//! - codec: canonical encoding of a Shipment
//! - Ledger / ResultsIterator: the contract required of the external ledger
//! - ScopedIterator: close-on-drop wrapper for query cursors
//! - Contract types: Timestamp, TxId, KeyValue, KeyModification
//! - Error: ledger and codec failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod contract;
pub mod error;
pub mod iter;
pub mod shipment;
pub mod traits;

pub use contract::{KeyModification, KeyValue, Timestamp, TxId};
pub use error::{Error, Result};
pub use iter::ScopedIterator;
pub use shipment::Shipment;
pub use traits::{HistoryIterator, Ledger, RangeIterator, ResultsIterator};
