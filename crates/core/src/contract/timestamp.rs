//! Commit timestamp type
//!
//! The ledger stamps every committed version with the moment it was ordered.
//! Timestamps are carried the way the ledger reports them: whole seconds
//! since the Unix epoch plus a nanosecond remainder.
//!
//! ## Usage
//!
//! ```
//! use shipledger_core::Timestamp;
//!
//! let now = Timestamp::now();
//! let fixed = Timestamp::new(1_672_628_645, 500_000_000);
//! assert_eq!(fixed.seconds(), 1_672_628_645);
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Seconds + nanoseconds since Unix epoch
///
/// ## Invariants
///
/// - `nanos` is always in `0..1_000_000_000`
/// - Ordering is chronological
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp {
        seconds: 0,
        nanos: 0,
    };

    /// Create a timestamp, carrying out-of-range nanoseconds into seconds
    pub fn new(seconds: i64, nanos: i64) -> Self {
        let seconds = seconds.saturating_add(nanos.div_euclid(NANOS_PER_SEC));
        let nanos = nanos.rem_euclid(NANOS_PER_SEC) as i32;
        Timestamp { seconds, nanos }
    }

    /// Create a timestamp for the current moment
    ///
    /// Returns epoch if the system clock is before the Unix epoch.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp::from(duration)
    }

    /// Create a timestamp from whole seconds since epoch
    #[inline]
    pub const fn from_secs(seconds: i64) -> Self {
        Timestamp { seconds, nanos: 0 }
    }

    /// Whole seconds since epoch
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond remainder, always below one second
    #[inline]
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Convert to a chrono UTC datetime
    ///
    /// Returns `None` when the instant is outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanos as u32)
    }

    /// Render as RFC 3339 in UTC with as much sub-second precision as needed
    ///
    /// Falls back to `seconds.nanos` for instants chrono cannot represent.
    pub fn to_rfc3339(&self) -> String {
        match self.to_utc() {
            Some(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            None => self.to_string(),
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}

impl From<Duration> for Timestamp {
    /// Create from duration since epoch
    fn from(duration: Duration) -> Self {
        let secs = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
        Timestamp {
            seconds: secs,
            nanos: duration.subsec_nanos() as i32,
        }
    }
}
