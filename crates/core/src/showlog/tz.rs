//! UTC+8 presentation of instants.
//!
//! Every civil date and time the view sees is pinned to UTC+8 regardless of
//! the machine's local timezone: record start/end times, the "now" reference
//! used for status, and each iterated day of a break span. Mixing offsets at
//! day edges would let a record's formatted date disagree with the day used
//! for break iteration.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Fixed presentation timezone for all show times (UTC+8).
pub fn show_tz() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("static offset is in range")
}

/// Converts epoch milliseconds to an instant, if representable.
fn instant(millis: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.with_timezone(&show_tz()))
}

/// Formats epoch milliseconds as a UTC+8 civil date (`YYYY-MM-DD`).
///
/// Missing or out-of-range input yields an empty string.
pub fn format_date(millis: Option<i64>) -> String {
    match millis.and_then(instant) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Formats epoch milliseconds as a UTC+8 wall-clock time (`HH:MM`).
///
/// Missing or out-of-range input yields an empty string.
pub fn format_time(millis: Option<i64>) -> String {
    match millis.and_then(instant) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// The UTC+8 calendar day containing the given instant.
pub fn civil_date(millis: i64) -> Option<NaiveDate> {
    instant(millis).map(|dt| dt.date_naive())
}

/// Formats a UTC+8 calendar day the same way `format_date` does.
pub fn format_civil_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Converts a UTC+8 civil date-time to epoch milliseconds.
pub fn civil_to_millis(naive: NaiveDateTime) -> i64 {
    match show_tz().from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) => dt.timestamp_millis(),
        // A fixed offset has no gaps or folds; this arm is unreachable but
        // cheaper to handle than to prove to the compiler.
        _ => Utc.from_utc_datetime(&naive).timestamp_millis() - 8 * 3600 * 1000,
    }
}
