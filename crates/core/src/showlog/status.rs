use chrono::{DateTime, Utc};

use super::types::ShowStatus;

/// Derives a show's status from its timestamps and an explicit "now".
///
/// `now` is injected rather than read from the wall clock so the result is
/// deterministic under test. Comparison happens on instants, so the UTC+8
/// presentation offset cannot change the outcome.
///
/// Missing or unrepresentable timestamps make the comparison impossible and
/// default to [`ShowStatus::Upcoming`]. [`ShowStatus::Cancelled`] is never
/// derived here.
pub fn derive_status(now: DateTime<Utc>, start: Option<i64>, end: Option<i64>) -> ShowStatus {
    let Some(start) = start else {
        return ShowStatus::Upcoming;
    };
    if DateTime::<Utc>::from_timestamp_millis(start).is_none() {
        return ShowStatus::Upcoming;
    }
    if let Some(end) = end {
        if DateTime::<Utc>::from_timestamp_millis(end).is_none() {
            return ShowStatus::Upcoming;
        }
    }

    let now_millis = now.timestamp_millis();
    if let Some(end) = end {
        if now_millis > end {
            return ShowStatus::Completed;
        }
    }
    if now_millis > start {
        return ShowStatus::InProgress;
    }
    ShowStatus::Upcoming
}
