//! Shared value types for the Monday domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! meaningful values that participate in automation decisions (timestamps,
//! timeline ranges).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date format used by Monday for timeline and date column values.
pub const MONDAY_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly; the underlying representation can change without affecting the
/// domain API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// The decoded value of a `timerange` column.
///
/// Both ends are `None` when the pulse has no timeline set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// First day of the range (`from` on the wire).
    pub start: Option<NaiveDate>,
    /// Last day of the range (`to` on the wire).
    pub end: Option<NaiveDate>,
}

impl Timeline {
    /// Returns `true` if neither end of the range is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn show(date: Option<NaiveDate>) -> String {
            date.map(|d| d.format(MONDAY_DATE_FORMAT).to_string())
                .unwrap_or_else(|| "None".to_string())
        }
        write!(f, "start: {}, end: {}", show(self.start), show(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_deserializes_from_rfc3339() {
        let ts: Timestamp = serde_json::from_str("\"2018-03-01T09:30:00Z\"").unwrap();
        assert_eq!(ts.to_string(), "2018-03-01T09:30:00+00:00");
    }

    #[test]
    fn timeline_display_marks_missing_ends() {
        let timeline = Timeline {
            start: NaiveDate::from_ymd_opt(2018, 3, 1),
            end: None,
        };
        assert_eq!(timeline.to_string(), "start: 2018-03-01, end: None");
        assert!(!timeline.is_empty());
        assert!(Timeline::default().is_empty());
    }
}
