//! Rendering of query results into response payloads.
//!
//! Range and history results are arrays of objects. Two layouts exist:
//!
//! - [`ResponseFormat::Legacy`] reproduces, byte for byte, the layout that
//!   existing ledger clients parse: `{"Key":"k", "Record":<raw>}` entries
//!   joined by `,` inside `[...]`, with keys and tx ids written unescaped
//!   and stored values embedded as-is.
//! - [`ResponseFormat::Json`] serializes the same members with serde, so the
//!   payload is always valid JSON.

use chrono::{DateTime, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use shipledger_core::{KeyModification, KeyValue, Timestamp};

use crate::{Error, Output, Result};

/// Layout of range and history payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Hand-assembled layout existing clients parse
    #[default]
    Legacy,
    /// serde_json serialization of the same members
    Json,
}

/// Rendering of history timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampStyle {
    /// RFC 3339 in UTC, sub-second digits only when present
    #[default]
    Rfc3339,
    /// `2006-01-02 15:04:05.999999999 -0700 MST` in the host timezone
    Legacy,
}

/// Turns command outputs into response payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultFormatter {
    format: ResponseFormat,
    timestamps: TimestampStyle,
}

impl ResultFormatter {
    /// Create a formatter
    pub fn new(format: ResponseFormat, timestamps: TimestampStyle) -> Self {
        Self { format, timestamps }
    }

    /// Payload bytes for any output.
    ///
    /// Writes carry the written key, `get` carries the stored bytes (empty if
    /// absent), queries carry the rendered array.
    pub fn render(&self, output: &Output) -> Result<Vec<u8>> {
        match output {
            Output::Inserted { key } | Output::Written { key } => Ok(key.clone().into_bytes()),
            Output::Value(value) => Ok(value.clone().unwrap_or_default()),
            Output::Range(entries) => self.range(entries),
            Output::History(entries) => self.history(entries),
        }
    }

    /// Render range query results
    pub fn range(&self, entries: &[KeyValue]) -> Result<Vec<u8>> {
        match self.format {
            ResponseFormat::Legacy => Ok(legacy_array(entries, |buf, entry| {
                buf.extend_from_slice(b"{\"Key\":\"");
                buf.extend_from_slice(entry.key.as_bytes());
                buf.extend_from_slice(b"\", \"Record\":");
                buf.extend_from_slice(&entry.value);
                buf.push(b'}');
            })),
            ResponseFormat::Json => {
                let rows: Vec<RangeRow<'_>> = entries
                    .iter()
                    .map(|entry| RangeRow {
                        key: &entry.key,
                        record: Embedded(&entry.value),
                    })
                    .collect();
                to_json(&rows)
            }
        }
    }

    /// Render history query results
    pub fn history(&self, entries: &[KeyModification]) -> Result<Vec<u8>> {
        match self.format {
            ResponseFormat::Legacy => Ok(legacy_array(entries, |buf, entry| {
                buf.extend_from_slice(b"{\"TxId\":\"");
                buf.extend_from_slice(entry.tx_id.as_str().as_bytes());
                buf.extend_from_slice(b"\", \"Value\":");
                match stored_value(entry) {
                    Some(value) => buf.extend_from_slice(value),
                    None => buf.extend_from_slice(b"null"),
                }
                buf.extend_from_slice(b", \"Timestamp\":\"");
                buf.extend_from_slice(self.timestamp(entry.timestamp).as_bytes());
                buf.extend_from_slice(b"\", \"IsDelete\":\"");
                buf.extend_from_slice(bool_text(entry.is_delete).as_bytes());
                buf.extend_from_slice(b"\"}");
            })),
            ResponseFormat::Json => {
                let rows: Vec<HistoryRow<'_>> = entries
                    .iter()
                    .map(|entry| HistoryRow {
                        tx_id: entry.tx_id.as_str(),
                        value: stored_value(entry).map(Embedded),
                        timestamp: self.timestamp(entry.timestamp),
                        is_delete: bool_text(entry.is_delete),
                    })
                    .collect();
                to_json(&rows)
            }
        }
    }

    /// Render a commit timestamp in the configured style
    pub fn timestamp(&self, ts: Timestamp) -> String {
        match self.timestamps {
            TimestampStyle::Rfc3339 => ts.to_rfc3339(),
            TimestampStyle::Legacy => match ts.to_utc() {
                Some(utc) => legacy_layout(&utc.with_timezone(&Local)),
                None => ts.to_string(),
            },
        }
    }
}

/// `2006-01-02 15:04:05.999999999 -0700 MST` layout.
///
/// Fractional seconds are omitted when zero and trimmed of trailing zeros
/// otherwise. Where the zone has no abbreviation chrono prints the offset.
pub fn legacy_layout<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = dt.format("%Y-%m-%d %H:%M:%S").to_string();
    let nanos = dt.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let digits = format!("{:09}", nanos);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out.push_str(&dt.format(" %z %Z").to_string());
    out
}

fn legacy_array<T>(entries: &[T], mut write: impl FnMut(&mut Vec<u8>, &T)) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + entries.len() * 64);
    buf.push(b'[');
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            buf.push(b',');
        }
        write(&mut buf, entry);
    }
    buf.push(b']');
    buf
}

fn stored_value(entry: &KeyModification) -> Option<&[u8]> {
    if entry.is_delete {
        return None;
    }
    entry.value.as_deref()
}

fn bool_text(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

fn to_json<T: Serialize>(rows: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(rows).map_err(|e| Error::Serialization {
        reason: e.to_string(),
    })
}

#[derive(Serialize)]
struct RangeRow<'a> {
    #[serde(rename = "Key")]
    key: &'a str,
    #[serde(rename = "Record")]
    record: Embedded<'a>,
}

#[derive(Serialize)]
struct HistoryRow<'a> {
    #[serde(rename = "TxId")]
    tx_id: &'a str,
    #[serde(rename = "Value")]
    value: Option<Embedded<'a>>,
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "IsDelete")]
    is_delete: &'static str,
}

/// Stored bytes embedded verbatim when they are JSON, as a string otherwise
struct Embedded<'a>(&'a [u8]);

impl Serialize for Embedded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match serde_json::from_slice::<&RawValue>(self.0) {
            Ok(raw) => raw.serialize(serializer),
            Err(_) => serializer.serialize_str(&String::from_utf8_lossy(self.0)),
        }
    }
}
