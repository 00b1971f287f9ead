//! Duty-status events as delivered by the trip planner.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::category::{DutyCategory, classify};

/// Naive datetime layouts accepted after RFC 3339. Interpreted as UTC.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// One duty-status interval.
///
/// Timestamps are kept as the raw strings received so that a malformed value
/// only excludes this event from the grid instead of failing the whole
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Interval start (ISO 8601).
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub start_time: Option<String>,

    /// Interval end (ISO 8601). Absent means a single quarter-hour.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<String>,

    /// Free-text status label, classified into a [`DutyCategory`].
    #[serde(default)]
    pub status: String,

    /// Display form of the status used in remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Global ordering assigned by the planner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

/// Accepts any JSON value for a timestamp field. Non-strings become `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl Event {
    /// Creates an event with a start, optional end and status.
    pub fn new(
        start_time: impl Into<String>,
        end_time: Option<impl Into<String>>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            start_time: Some(start_time.into()),
            end_time: end_time.map(Into::into),
            status: status.into(),
            ..Self::default()
        }
    }

    /// Attaches a remark note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The grid row this event writes to.
    pub fn category(&self) -> DutyCategory {
        classify(&self.status)
    }

    /// Status text shown in remarks, falling back to the category's name.
    pub fn status_label(&self) -> &str {
        match self.status_display.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => self.category().display_name(),
        }
    }
}

/// An event that can be placed on the duty grid.
///
/// This trait allows the grid mapper to work with different event
/// representations (e.g., [`Event`] or test fixtures).
pub trait GridEvent {
    /// Parsed start, or `None` if missing or unparseable.
    fn start(&self) -> Option<DateTime<Utc>>;

    /// Parsed end, or `None` if missing or unparseable.
    fn end(&self) -> Option<DateTime<Utc>>;

    /// The raw status label.
    fn status(&self) -> &str;
}

impl GridEvent for Event {
    fn start(&self) -> Option<DateTime<Utc>> {
        self.start_time.as_deref().and_then(parse_timestamp)
    }

    fn end(&self) -> Option<DateTime<Utc>> {
        self.end_time.as_deref().and_then(parse_timestamp)
    }

    fn status(&self) -> &str {
        &self.status
    }
}

/// Parses an ISO 8601 timestamp into UTC.
///
/// Supports:
/// - RFC 3339 with offset: "2024-01-01T08:00:00-05:00" (normalized to UTC)
/// - Naive datetime: "2024-01-01T08:00:00", "2024-01-01 08:00:00.5" (taken as UTC)
/// - Bare date: "2024-01-01" (UTC midnight)
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
