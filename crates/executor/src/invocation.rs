//! Raw invocations as they arrive from a client.
//!
//! The ledger environment hands over a flat list of strings whose first
//! element names the function. On the wire this is the `{"Args":[...]}`
//! envelope; a bare JSON array of strings is accepted as well.

use serde::Deserialize;

use crate::{Error, Result};

/// An operation name plus its positional arguments, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// Function name as supplied (may be empty)
    pub function: String,
    /// Positional arguments following the function name
    pub args: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Object {
        #[serde(rename = "Args", alias = "args")]
        args: Vec<String>,
    },
    List(Vec<String>),
}

impl Invocation {
    /// Create an invocation
    pub fn new(function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            function: function.into(),
            args,
        }
    }

    /// Split a flat argument list into function name and parameters.
    ///
    /// An empty list yields an empty function name, which dispatch rejects.
    pub fn from_args(all: Vec<String>) -> Self {
        let mut all = all.into_iter();
        let function = all.next().unwrap_or_default();
        Self {
            function,
            args: all.collect(),
        }
    }

    /// Parse a JSON envelope (`{"Args":[...]}`) or a JSON array of strings.
    pub fn parse_json(input: &str) -> Result<Self> {
        let envelope: Envelope =
            serde_json::from_str(input).map_err(|e| Error::InvalidInvocation {
                reason: e.to_string(),
            })?;
        let all = match envelope {
            Envelope::Object { args } | Envelope::List(args) => args,
        };
        Ok(Self::from_args(all))
    }
}
