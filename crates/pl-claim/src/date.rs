//! Issuance timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Issuance time as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueDate {
    /// Seconds since the unix epoch, possibly fractional.
    UnixSeconds(f64),
    /// A textual timestamp, usually ISO-8601.
    Timestamp(String),
}

impl IssueDate {
    /// Whole unix seconds, or `None` if the value is not a usable time.
    pub fn to_unix_seconds(&self) -> Option<i64> {
        match self {
            Self::UnixSeconds(secs) => floor_seconds(*secs),
            Self::Timestamp(text) => parse_timestamp(text).map(|dt| dt.timestamp()),
        }
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.to_unix_seconds()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

impl From<i64> for IssueDate {
    fn from(secs: i64) -> Self {
        Self::UnixSeconds(secs as f64)
    }
}

impl From<f64> for IssueDate {
    fn from(secs: f64) -> Self {
        Self::UnixSeconds(secs)
    }
}

impl From<&str> for IssueDate {
    fn from(text: &str) -> Self {
        Self::Timestamp(text.to_string())
    }
}

impl From<String> for IssueDate {
    fn from(text: String) -> Self {
        Self::Timestamp(text)
    }
}

impl From<DateTime<Utc>> for IssueDate {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Timestamp(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Floor to whole seconds; non-finite or out-of-calendar values give `None`.
pub fn floor_seconds(secs: f64) -> Option<i64> {
    if !secs.is_finite() {
        return None;
    }
    let floored = secs.floor();
    if floored < i64::MIN as f64 || floored > i64::MAX as f64 {
        return None;
    }
    let whole = floored as i64;
    DateTime::from_timestamp(whole, 0).map(|_| whole)
}

/// Render unix seconds as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn iso_from_seconds(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S UTC",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar timestamp. Values without an offset are read as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
