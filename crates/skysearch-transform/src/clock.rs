//! Clock implementations and index timestamp formatting

use chrono::{DateTime, Utc};
use skysearch_domain::Clock;

/// Format used for `doc_index_ts`: UTC, millisecond precision
pub const INDEX_TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format an instant as a document index timestamp
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use skysearch_transform::format_index_ts;
///
/// let ts = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
/// assert_eq!(format_index_ts(ts), "2006-01-02T15:04:05.000Z");
/// ```
pub fn format_index_ts(ts: DateTime<Utc>) -> String {
    ts.format(INDEX_TS_FORMAT).to_string()
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for reproducible documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to `instant`
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Pin the clock to an RFC 3339 timestamp
    pub fn from_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
