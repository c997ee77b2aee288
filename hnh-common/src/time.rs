//! Timestamp utilities
//!
//! Entry dates travel as epoch milliseconds; these helpers convert at the edges.

use chrono::{DateTime, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current time as epoch milliseconds
pub fn now_millis() -> i64 {
    now().timestamp_millis()
}

/// Convert epoch milliseconds to a UTC timestamp
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Format epoch milliseconds as a calendar date (`YYYY-MM-DD`)
pub fn format_date(millis: i64) -> String {
    millis_to_datetime(millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown date".to_string())
}
