use chrono::{DateTime, Duration, Utc};

use super::classify::classify_title;
use super::status::derive_status;
use super::types::{RawShowLog, ShowStatus, ViewEntry, PERFORMER};
use super::tz::{civil_date, format_civil_date, format_date, format_time};

/// Literal title marking an on-break record.
pub const BREAK_MARKER: &str = "暂休";

/// Cap on the number of per-day entries generated for one break record.
///
/// Open-ended breaks are stored with a far-future end timestamp (see
/// `CreateShowLogRequest::break_starting`), which would otherwise expand to
/// tens of thousands of entries. Three years of days is more than any view
/// pages through; the tail beyond the cap is dropped.
pub const MAX_BREAK_DAYS: i64 = 1096;

/// Transforms raw store records into calendar view entries.
///
/// Pure function of its input and the injected `now` (used only for status
/// derivation). Each non-break record yields exactly one entry; a break
/// record yields a contiguous run of per-day entries at its position.
/// Malformed timestamps degrade to empty date/time strings and an
/// `Upcoming` status instead of failing the batch.
pub fn transform(records: &[RawShowLog], now: DateTime<Utc>) -> Vec<ViewEntry> {
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        let base = base_entry(record, now);
        if record.title == BREAK_MARKER && record.end_time.is_some() {
            expand_break(record, base, &mut entries);
        } else {
            entries.push(base);
        }
    }

    entries
}

/// True when the entry set says the performer is currently on break.
///
/// Pure query over [`transform`] output: looks for the original entry of a
/// break record whose span covers "now". The view uses this to switch
/// between start-break and stop-break controls.
pub fn is_on_break(entries: &[ViewEntry]) -> bool {
    entries.iter().any(|entry| {
        entry.title == BREAK_MARKER
            && entry.status == ShowStatus::InProgress
            && entry.is_original
    })
}

/// Builds the single view entry a record maps to before break expansion.
fn base_entry(record: &RawShowLog, now: DateTime<Utc>) -> ViewEntry {
    let title = record.display_title().to_string();
    let location = record.display_location().to_string();

    ViewEntry {
        id: record.id.clone(),
        original_id: None,
        description: format!("{title} - {location}"),
        date: format_date(record.start_time),
        time: format_time(record.start_time),
        end_time: format_time(record.end_time),
        entry_type: classify_title(&record.title),
        status: derive_status(now, record.start_time, record.end_time),
        is_break: false,
        is_original: false,
        members: vec![PERFORMER.to_string()],
        start_time: record.start_time,
        end_time_raw: record.end_time,
        title,
        location,
    }
}

/// Expands a break record into one entry per UTC+8 calendar day it spans.
///
/// The first day (the record's own start date) is marked `is_original`;
/// every generated entry carries `original_id` so the view can locate the
/// real record for deletion. Falls back to the unexpanded entry when either
/// boundary date is unavailable.
fn expand_break(record: &RawShowLog, base: ViewEntry, out: &mut Vec<ViewEntry>) {
    let span = record
        .start_time
        .and_then(civil_date)
        .zip(record.end_time.and_then(civil_date));

    let Some((start_date, end_date)) = span else {
        out.push(base);
        return;
    };

    let start_str = format_civil_date(start_date);
    let mut current = start_date;
    let mut generated = 0i64;

    while current <= end_date && generated < MAX_BREAK_DAYS {
        let date_str = format_civil_date(current);
        let mut day_entry = base.clone();
        day_entry.is_break = true;
        day_entry.original_id = Some(record.id.clone());
        day_entry.is_original = date_str == start_str;
        day_entry.date = date_str;
        out.push(day_entry);

        current += Duration::days(1);
        generated += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showlog::types::ShowType;
    use crate::showlog::tz::show_tz;
    use chrono::TimeZone;

    /// Epoch millis for a UTC+8 wall-clock instant.
    fn cst_millis(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        show_tz()
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 2, 4, 0, 0).unwrap() // 12:00 Dec-02 UTC+8
    }

    #[test]
    fn test_transform_single_entry_per_record() {
        let records = vec![RawShowLog::new("1", "定期公演", "星梦剧院")
            .with_start(cst_millis(2024, 12, 5, 19, 30))
            .with_end(cst_millis(2024, 12, 5, 21, 0))];

        let entries = transform(&records, fixed_now());

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.date, "2024-12-05");
        assert_eq!(entry.time, "19:30");
        assert_eq!(entry.end_time, "21:00");
        assert_eq!(entry.entry_type, ShowType::Regular);
        assert_eq!(entry.status, ShowStatus::Upcoming);
        assert_eq!(entry.description, "定期公演 - 星梦剧院");
        assert_eq!(entry.members, vec![PERFORMER.to_string()]);
        assert!(!entry.is_break);
        assert!(entry.original_id.is_none());
    }

    #[test]
    fn test_transform_preserves_input_order() {
        let records = vec![
            RawShowLog::new("later", "A", "x").with_start(cst_millis(2024, 12, 20, 19, 0)),
            RawShowLog::new("earlier", "B", "y").with_start(cst_millis(2024, 12, 1, 19, 0)),
        ];

        let entries = transform(&records, fixed_now());

        assert_eq!(entries[0].id, "later");
        assert_eq!(entries[1].id, "earlier");
    }

    #[test]
    fn test_transform_malformed_start_degrades() {
        let records = vec![RawShowLog::new("1", "演唱会", "某地")];

        let entries = transform(&records, fixed_now());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "");
        assert_eq!(entries[0].time, "");
        assert_eq!(entries[0].status, ShowStatus::Upcoming);
    }

    #[test]
    fn test_transform_blank_fields_get_placeholders() {
        let records = vec![RawShowLog::new("1", "", "")];
        let entries = transform(&records, fixed_now());
        assert_eq!(entries[0].title, "未命名演出");
        assert_eq!(entries[0].location, "地点待定");
        assert_eq!(entries[0].entry_type, ShowType::Other);
    }

    #[test]
    fn test_break_expands_one_entry_per_day() {
        // Dec-01 00:00 through Dec-03 00:00 UTC+8 spans three calendar days.
        let records = vec![RawShowLog::new("b1", BREAK_MARKER, BREAK_MARKER)
            .with_start(cst_millis(2024, 12, 1, 0, 0))
            .with_end(cst_millis(2024, 12, 3, 0, 0))];

        let entries = transform(&records, fixed_now());

        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries.iter().map(|e| e.date.as_str()).collect::<Vec<_>>(),
            vec!["2024-12-01", "2024-12-02", "2024-12-03"]
        );
        assert!(entries.iter().all(|e| e.is_break));
        assert!(entries
            .iter()
            .all(|e| e.original_id.as_deref() == Some("b1")));
        assert_eq!(
            entries.iter().map(|e| e.is_original).collect::<Vec<_>>(),
            vec![true, false, false]
        );
    }

    #[test]
    fn test_break_day_boundary_uses_utc8_days() {
        // Start at 23:59 UTC = 07:59 next day UTC+8; expansion must start on
        // the UTC+8 day, matching the formatted date.
        let start = Utc
            .with_ymd_and_hms(2024, 11, 30, 23, 59, 0)
            .unwrap()
            .timestamp_millis();
        let records = vec![RawShowLog::new("b1", BREAK_MARKER, BREAK_MARKER)
            .with_start(start)
            .with_end(start + 24 * 3600 * 1000)];

        let entries = transform(&records, fixed_now());

        assert_eq!(entries[0].date, "2024-12-01");
        assert!(entries[0].is_original);
    }

    #[test]
    fn test_break_without_end_is_not_expanded() {
        let records = vec![
            RawShowLog::new("b1", BREAK_MARKER, BREAK_MARKER).with_start(cst_millis(2024, 12, 1, 0, 0))
        ];

        let entries = transform(&records, fixed_now());

        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_break);
    }

    #[test]
    fn test_break_expansion_is_capped() {
        // A 2099 sentinel end must not expand into decades of entries.
        let records = vec![RawShowLog::new("b1", BREAK_MARKER, BREAK_MARKER)
            .with_start(cst_millis(2024, 12, 1, 0, 0))
            .with_end(cst_millis(2099, 12, 31, 23, 59))];

        let entries = transform(&records, fixed_now());

        assert_eq!(entries.len(), MAX_BREAK_DAYS as usize);
        assert!(entries[0].is_original);
    }

    #[test]
    fn test_is_on_break() {
        let now = fixed_now();
        let active = vec![RawShowLog::new("b1", BREAK_MARKER, BREAK_MARKER)
            .with_start(cst_millis(2024, 12, 1, 0, 0))
            .with_end(cst_millis(2024, 12, 10, 0, 0))];
        assert!(is_on_break(&transform(&active, now)));

        // Break entirely in the past: completed, not on break.
        let past = vec![RawShowLog::new("b2", BREAK_MARKER, BREAK_MARKER)
            .with_start(cst_millis(2024, 11, 1, 0, 0))
            .with_end(cst_millis(2024, 11, 10, 0, 0))];
        assert!(!is_on_break(&transform(&past, now)));

        // A regular in-progress show is not a break.
        let regular = vec![RawShowLog::new("s1", "定期公演", "x")
            .with_start(cst_millis(2024, 12, 2, 11, 0))
            .with_end(cst_millis(2024, 12, 2, 13, 0))];
        assert!(!is_on_break(&transform(&regular, now)));
    }

    #[test]
    fn test_view_entry_json_shape() {
        let records = vec![RawShowLog::new("1", "定期公演", "星梦剧院")
            .with_start(cst_millis(2024, 12, 5, 19, 30))
            .with_end(cst_millis(2024, 12, 5, 21, 0))];
        let entries = transform(&records, fixed_now());

        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["type"], "定期公演");
        assert_eq!(json["status"], "upcoming");
        assert_eq!(json["endTime"], "21:00");
        assert_eq!(json["isBreak"], false);
        assert!(json.get("originalId").is_none());
    }
}
