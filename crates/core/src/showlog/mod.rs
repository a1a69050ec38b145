//! Show-log domain: raw records, view entries, and the transformation
//! between them.

mod classify;
mod error;
mod requests;
mod status;
mod transform;
mod types;
mod tz;
mod view;

pub use classify::classify_title;
pub use error::ShowLogError;
pub use requests::{open_ended_break_end, CreateShowLogRequest, UpdateShowLogRequest};
pub use status::derive_status;
pub use transform::{is_on_break, transform, BREAK_MARKER, MAX_BREAK_DAYS};
pub use types::{RawShowLog, ShowStatus, ShowType, ViewEntry, PERFORMER};
pub use tz::{civil_date, civil_to_millis, format_civil_date, format_date, format_time, show_tz};
pub use view::{
    build_day_data, group_entries_by_date, month_dates, sort_entries_chronological,
    timeline_entries, DayData,
};
