//! Command enum defining the ledger operations.
//!
//! An invocation arrives as an operation name plus positional string
//! arguments. [`Command::from_invocation`] validates the name and argument
//! count once, at the boundary, and produces a typed command; handlers never
//! see positional arguments.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shipledger_core::Shipment;

use crate::{Error, Result};

/// Arguments taken by `set` and `edit`: the key followed by every field
const SHIPMENT_ARITY: usize = 1 + Shipment::FIELD_COUNT;

/// The invocable operations, by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `set`: insert a shipment if the key is absent
    Set,
    /// `edit`: overwrite a shipment unconditionally
    Edit,
    /// `get`: read the raw value under a key
    Get,
    /// `getAll`: range query over `[start, end)`
    GetAll,
    /// `getHist`: every committed version of a key
    GetHist,
}

impl Operation {
    /// All operations, in dispatch-table order
    pub const ALL: [Operation; 5] = [
        Operation::Set,
        Operation::Edit,
        Operation::Get,
        Operation::GetAll,
        Operation::GetHist,
    ];

    /// Wire name (exact, case-sensitive)
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Set => "set",
            Operation::Edit => "edit",
            Operation::Get => "get",
            Operation::GetAll => "getAll",
            Operation::GetHist => "getHist",
        }
    }

    /// Number of positional arguments the operation requires
    pub const fn arity(&self) -> usize {
        match self {
            Operation::Set | Operation::Edit => SHIPMENT_ARITY,
            Operation::Get | Operation::GetHist => 1,
            Operation::GetAll => 2,
        }
    }

    /// Look up an operation by wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Whether the operation writes to the ledger
    pub const fn is_write(&self) -> bool {
        matches!(self, Operation::Set | Operation::Edit)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownFunction {
            name: s.to_string(),
        })
    }
}

/// How a shipment write treats an existing value under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WritePolicy {
    /// Fail with `AlreadyExists` if the key holds a value; record the key in
    /// the last-key slot on success
    InsertIfAbsent,
    /// Replace whatever is stored; the last-key slot is left alone
    Overwrite,
}

/// A key plus the shipment to store under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Ledger key
    pub key: String,
    /// Record to encode and store
    pub shipment: Shipment,
}

impl ShipmentRequest {
    /// Create a request
    pub fn new(key: impl Into<String>, shipment: Shipment) -> Self {
        Self {
            key: key.into(),
            shipment,
        }
    }

    fn from_positional(args: [String; SHIPMENT_ARITY]) -> Self {
        let [key, fields @ ..] = args;
        Self {
            key,
            shipment: Shipment::from_fields(fields),
        }
    }
}

/// A validated invocation, ready for dispatch.
///
/// # Example
///
/// ```
/// use shipledger_executor::Command;
///
/// let cmd = Command::from_invocation("get", vec!["ship1".into()]).unwrap();
/// assert_eq!(cmd, Command::Get { key: "ship1".into() });
///
/// assert!(Command::from_invocation("get", vec![]).is_err());
/// assert!(Command::from_invocation("delete", vec!["ship1".into()]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Insert a shipment if the key is absent.
    /// Returns: `Output::Inserted`
    Set(ShipmentRequest),

    /// Overwrite a shipment.
    /// Returns: `Output::Written`
    Edit(ShipmentRequest),

    /// Read the raw value under a key.
    /// Returns: `Output::Value`
    Get {
        /// Key to read
        key: String,
    },

    /// Read current values for keys in `[start_key, end_key)`.
    /// Returns: `Output::Range`
    GetAll {
        /// Inclusive lower bound; empty means unbounded
        start_key: String,
        /// Exclusive upper bound; empty means unbounded
        end_key: String,
    },

    /// Read every committed version of a key, oldest first.
    /// Returns: `Output::History`
    GetHist {
        /// Key whose history to read
        key: String,
    },
}

impl Command {
    /// Validate an operation name and its positional arguments.
    ///
    /// # Errors
    ///
    /// - `UnknownFunction` if `function` is not one of the five operations
    /// - `ArgumentCount` if `args` does not have exactly the operation's arity
    pub fn from_invocation(function: &str, args: Vec<String>) -> Result<Self> {
        let operation: Operation = function.parse()?;
        let cmd = match operation {
            Operation::Set => Command::Set(ShipmentRequest::from_positional(
                positional::<SHIPMENT_ARITY>(operation, args)?,
            )),
            Operation::Edit => Command::Edit(ShipmentRequest::from_positional(
                positional::<SHIPMENT_ARITY>(operation, args)?,
            )),
            Operation::Get => {
                let [key] = positional::<1>(operation, args)?;
                Command::Get { key }
            }
            Operation::GetAll => {
                let [start_key, end_key] = positional::<2>(operation, args)?;
                Command::GetAll { start_key, end_key }
            }
            Operation::GetHist => {
                let [key] = positional::<1>(operation, args)?;
                Command::GetHist { key }
            }
        };
        Ok(cmd)
    }

    /// The operation this command performs
    pub fn operation(&self) -> Operation {
        match self {
            Command::Set(_) => Operation::Set,
            Command::Edit(_) => Operation::Edit,
            Command::Get { .. } => Operation::Get,
            Command::GetAll { .. } => Operation::GetAll,
            Command::GetHist { .. } => Operation::GetHist,
        }
    }

    /// Whether this command writes to the ledger
    pub fn is_write(&self) -> bool {
        self.operation().is_write()
    }
}

fn positional<const N: usize>(operation: Operation, args: Vec<String>) -> Result<[String; N]> {
    <[String; N]>::try_from(args).map_err(|args| Error::ArgumentCount {
        operation: operation.name().to_string(),
        expected: operation.arity(),
        actual: args.len(),
    })
}
