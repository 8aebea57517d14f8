//! End-to-end shipment lifecycle tests
//!
//! Drives the public facade the way a ledger environment would:
//! - The documented walkthrough (set, duplicate set, edit, reads)
//! - Properties over arbitrary records and key sets
//! - Configuration files
//! - Concurrent invocations over one shared ledger

mod common;

mod concurrency;
mod config_file;
mod properties;
mod walkthrough;
