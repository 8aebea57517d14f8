//! Contract types shared between the ledger and its callers
//!
//! ## Module Structure
//!
//! - `timestamp`: seconds + nanos commit timestamps
//! - `tx_id`: transaction identifiers
//! - `entry`: range and history query entries

pub mod entry;
pub mod timestamp;
pub mod tx_id;

// Re-exports
pub use entry::{KeyModification, KeyValue};
pub use timestamp::Timestamp;
pub use tx_id::TxId;
