//! # shipledger executor
//!
//! Invocation handling for the shipment ledger. It provides:
//! - [`Invocation`] - raw function name plus positional arguments
//! - [`Command`]/[`Output`] - the typed instruction set and its results
//! - [`Executor`] - dispatch of commands to handlers over any [`Ledger`]
//! - [`ResultFormatter`] - rendering of outputs into response payloads
//! - [`Response`] - success payload or error message
//!
//! ## Quick Start
//!
//! ```text
//! use shipledger_executor::Executor;
//!
//! let executor = Executor::new(ledger);
//! let response = executor.invoke("getAll", vec!["".into(), "".into()]);
//! println!("{}", response.status());
//! ```
//!
//! ## Operations
//!
//! | Name | Arguments | Payload |
//! |------|-----------|---------|
//! | `set` | key + 14 fields | inserted key |
//! | `edit` | key + 14 fields | written key |
//! | `get` | key | stored bytes, empty if absent |
//! | `getAll` | start, end | array of `{Key, Record}` |
//! | `getHist` | key | array of `{TxId, Value, Timestamp, IsDelete}` |
//!
//! [`Ledger`]: shipledger_core::Ledger

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod config;
mod error;
mod executor;
mod format;
pub mod handlers;
mod invocation;
mod output;
mod response;

#[cfg(test)]
mod tests;

pub use command::{Command, Operation, ShipmentRequest, WritePolicy};
pub use config::{ExecutorConfig, LastKeyConfig, CONFIG_FILE_NAME, DEFAULT_LAST_KEY};
pub use error::{Error, Result};
pub use executor::Executor;
pub use format::{legacy_layout, ResponseFormat, ResultFormatter, TimestampStyle};
pub use invocation::Invocation;
pub use output::Output;
pub use response::{Response, STATUS_ERROR, STATUS_OK};
