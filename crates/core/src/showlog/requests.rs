//! Request payloads for the remote show-log store.
//!
//! Shared between the client and any future server so both sides agree on
//! the wire shape. Pure data types; validation happens here, before any
//! request is issued.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::error::ShowLogError;
use super::transform::BREAK_MARKER;
use super::tz::show_tz;

/// Request payload for creating a show-log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShowLogRequest {
    pub title: String,
    pub location: String,
    /// Epoch milliseconds.
    pub start_time: i64,
    /// Epoch milliseconds.
    pub end_time: i64,
}

impl CreateShowLogRequest {
    /// Creates a request with the given fields.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            start_time,
            end_time,
        }
    }

    /// Builds the record that starts a break at the given instant.
    ///
    /// Start is midnight of "now"'s UTC+8 day. The store has no open-ended
    /// marker, so the end is the far-future sentinel the frontend
    /// established; break expansion caps the day count locally, which keeps
    /// the sentinel from mattering anywhere else.
    pub fn break_starting(now: DateTime<Utc>) -> Self {
        let tz = show_tz();
        let today = now.with_timezone(&tz).date_naive();
        let start = tz
            .with_ymd_and_hms(today.year(), today.month(), today.day(), 0, 0, 0)
            .single()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| now.timestamp_millis());

        Self::new(BREAK_MARKER, BREAK_MARKER, start, open_ended_break_end())
    }

    /// Validates the payload before submission.
    pub fn validate(&self) -> Result<(), ShowLogError> {
        validate_fields(&self.title, &self.location, self.start_time, self.end_time)
    }
}

/// Request payload for updating a show-log record.
///
/// The store identifies the record by its Mongo-style `_id` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShowLogRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub location: String,
    /// Epoch milliseconds.
    pub start_time: i64,
    /// Epoch milliseconds.
    pub end_time: i64,
}

impl UpdateShowLogRequest {
    /// Creates an update request for the given record id.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            start_time,
            end_time,
        }
    }

    /// Validates the payload before submission.
    pub fn validate(&self) -> Result<(), ShowLogError> {
        validate_fields(&self.title, &self.location, self.start_time, self.end_time)
    }
}

/// Sentinel end timestamp for open-ended breaks: 2099-12-31 23:59:59 UTC+8.
pub fn open_ended_break_end() -> i64 {
    show_tz()
        .with_ymd_and_hms(2099, 12, 31, 23, 59, 59)
        .single()
        .expect("static timestamp is valid")
        .timestamp_millis()
}

fn validate_fields(
    title: &str,
    location: &str,
    start_time: i64,
    end_time: i64,
) -> Result<(), ShowLogError> {
    if title.trim().is_empty() {
        return Err(ShowLogError::EmptyTitle);
    }
    if title.len() > 200 {
        return Err(ShowLogError::TitleTooLong);
    }
    if location.trim().is_empty() {
        return Err(ShowLogError::EmptyLocation);
    }
    if end_time < start_time {
        return Err(ShowLogError::InvalidTimeRange);
    }
    Ok(())
}
