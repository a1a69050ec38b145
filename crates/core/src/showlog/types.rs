use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_id, deserialize_optional_millis};

/// The performer every show belongs to.
pub const PERFORMER: &str = "夏沫";

/// Placeholder title for records the store returns without one.
pub const UNTITLED_SHOW: &str = "未命名演出";

/// Placeholder location for records the store returns without one.
pub const UNKNOWN_LOCATION: &str = "地点待定";

/// A raw show-log record as the remote store returns it.
///
/// Timestamps are epoch milliseconds; anything the store sends that does not
/// parse as one decodes to `None` instead of failing the record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawShowLog {
    /// Store-assigned identifier (`_id` in Mongo-style responses).
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(
        default,
        rename = "startTime",
        deserialize_with = "deserialize_optional_millis"
    )]
    pub start_time: Option<i64>,
    #[serde(
        default,
        rename = "endTime",
        deserialize_with = "deserialize_optional_millis"
    )]
    pub end_time: Option<i64>,
}

impl RawShowLog {
    /// Creates a record with the given id, title, and location.
    pub fn new(id: impl Into<String>, title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            start_time: None,
            end_time: None,
        }
    }

    /// Sets the start timestamp (epoch milliseconds).
    pub fn with_start(mut self, millis: i64) -> Self {
        self.start_time = Some(millis);
        self
    }

    /// Sets the end timestamp (epoch milliseconds).
    pub fn with_end(mut self, millis: i64) -> Self {
        self.end_time = Some(millis);
        self
    }

    /// Title with the store placeholder applied for blank values.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED_SHOW
        } else {
            &self.title
        }
    }

    /// Location with the store placeholder applied for blank values.
    pub fn display_location(&self) -> &str {
        if self.location.trim().is_empty() {
            UNKNOWN_LOCATION
        } else {
            &self.location
        }
    }
}

/// Show category, classified from the title by keyword priority.
///
/// Serialized as the Chinese display label so the view model stays
/// byte-compatible with the store frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowType {
    #[serde(rename = "定期公演")]
    Regular,
    #[serde(rename = "特别公演")]
    Special,
    #[serde(rename = "见面会")]
    MeetAndGreet,
    #[serde(rename = "演唱会")]
    Concert,
    #[serde(rename = "其他")]
    Other,
}

impl ShowType {
    /// The Chinese display label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            ShowType::Regular => "定期公演",
            ShowType::Special => "特别公演",
            ShowType::MeetAndGreet => "见面会",
            ShowType::Concert => "演唱会",
            ShowType::Other => "其他",
        }
    }
}

impl std::fmt::Display for ShowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of a show relative to "now".
///
/// `Cancelled` is never derived from timestamps; it only exists so records
/// marked cancelled upstream survive the round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowStatus {
    Upcoming,
    InProgress,
    Completed,
    Cancelled,
}

impl ShowStatus {
    /// The Chinese display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ShowStatus::Upcoming => "即将开始",
            ShowStatus::InProgress => "进行中",
            ShowStatus::Completed => "已完成",
            ShowStatus::Cancelled => "已取消",
        }
    }
}

impl std::fmt::Display for ShowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A calendar-ready view entry derived from a raw record.
///
/// Ephemeral: recomputed on every transform, never persisted. A non-break
/// record produces exactly one entry; a break record produces one entry per
/// UTC+8 calendar day it spans, all sharing `original_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEntry {
    pub id: String,
    /// Id of the source record, set on break-expansion entries so the view
    /// can delete the real record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Civil date in UTC+8 (`YYYY-MM-DD`), empty when the source timestamp
    /// is missing or unparseable.
    pub date: String,
    /// Start time in UTC+8 (`HH:MM`), empty when unparseable.
    pub time: String,
    /// End time in UTC+8 (`HH:MM`), empty when unparseable.
    pub end_time: String,
    #[serde(rename = "type")]
    pub entry_type: ShowType,
    pub status: ShowStatus,
    #[serde(default)]
    pub is_break: bool,
    #[serde(default)]
    pub is_original: bool,
    pub members: Vec<String>,
    /// Original start timestamp (epoch milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Original end timestamp (epoch milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time_raw: Option<i64>,
}
