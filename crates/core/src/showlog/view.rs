//! View-side helpers over transformed entries.
//!
//! The transform leaves entries in input order; sorting, grouping, and
//! per-day bucketing are the consuming view's job and live here.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::ViewEntry;
use super::tz::format_civil_date;

/// Entries bucketed under a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayData {
    pub date: NaiveDate,
    pub entries: Vec<ViewEntry>,
}

impl DayData {
    /// Creates a new DayData with the given date and entries.
    pub fn new(date: NaiveDate, entries: Vec<ViewEntry>) -> Self {
        Self { date, entries }
    }

    /// Returns true if this day has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts entries by raw start timestamp ascending; entries without one sink
/// to the end.
pub fn sort_entries_chronological(entries: &mut [ViewEntry]) {
    entries.sort_by_key(|entry| entry.start_time.unwrap_or(i64::MAX));
}

/// Groups entries by their formatted display date.
///
/// Entries with an empty date (malformed source timestamps) end up under the
/// empty-string key, which no calendar day ever matches.
pub fn group_entries_by_date(entries: &[ViewEntry]) -> HashMap<String, Vec<&ViewEntry>> {
    let mut grouped: HashMap<String, Vec<&ViewEntry>> = HashMap::new();

    for entry in entries {
        grouped.entry(entry.date.clone()).or_default().push(entry);
    }

    grouped
}

/// All calendar days of the given month, in order.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut dates = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == month {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

/// Builds per-day buckets for a range of dates from the given entries.
pub fn build_day_data(dates: &[NaiveDate], entries: &[ViewEntry]) -> Vec<DayData> {
    let grouped = group_entries_by_date(entries);

    dates
        .iter()
        .map(|date| {
            let day_entries: Vec<ViewEntry> = grouped
                .get(&format_civil_date(*date))
                .map(|refs| refs.iter().map(|e| (*e).clone()).collect())
                .unwrap_or_default();

            DayData::new(*date, day_entries)
        })
        .collect()
}

/// Entries for the chronological timeline view.
///
/// Break records appear once (their original entry), not once per day, and
/// everything is sorted by start time.
pub fn timeline_entries(entries: &[ViewEntry]) -> Vec<ViewEntry> {
    let mut timeline: Vec<ViewEntry> = entries
        .iter()
        .filter(|entry| !entry.is_break || entry.is_original)
        .cloned()
        .collect();

    sort_entries_chronological(&mut timeline);
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showlog::transform::{transform, BREAK_MARKER};
    use crate::showlog::types::RawShowLog;
    use crate::showlog::tz::show_tz;
    use chrono::{TimeZone, Utc};

    fn cst_millis(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        show_tz()
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn sample_entries() -> Vec<ViewEntry> {
        let now = Utc.with_ymd_and_hms(2024, 12, 2, 4, 0, 0).unwrap();
        let records = vec![
            RawShowLog::new("late", "演唱会", "体育馆").with_start(cst_millis(2024, 12, 20, 19, 0)),
            RawShowLog::new("early", "定期公演", "剧院").with_start(cst_millis(2024, 12, 5, 19, 0)),
            RawShowLog::new("b1", BREAK_MARKER, BREAK_MARKER)
                .with_start(cst_millis(2024, 12, 1, 0, 0))
                .with_end(cst_millis(2024, 12, 3, 0, 0)),
        ];
        transform(&records, now)
    }

    #[test]
    fn test_sort_entries_chronological() {
        let mut entries = sample_entries();
        sort_entries_chronological(&mut entries);
        assert_eq!(entries[0].id, "b1");
        assert_eq!(entries.last().unwrap().id, "late");
    }

    #[test]
    fn test_sort_missing_start_last() {
        let now = Utc.with_ymd_and_hms(2024, 12, 2, 4, 0, 0).unwrap();
        let mut entries = transform(
            &[
                RawShowLog::new("no-time", "x", "y"),
                RawShowLog::new("timed", "x", "y").with_start(cst_millis(2024, 12, 5, 19, 0)),
            ],
            now,
        );
        sort_entries_chronological(&mut entries);
        assert_eq!(entries[0].id, "timed");
        assert_eq!(entries[1].id, "no-time");
    }

    #[test]
    fn test_group_entries_by_date() {
        let entries = sample_entries();
        let grouped = group_entries_by_date(&entries);

        // Break day 1 shares its date with nothing else.
        assert_eq!(grouped.get("2024-12-01").unwrap().len(), 1);
        assert_eq!(grouped.get("2024-12-05").unwrap().len(), 1);
        assert!(grouped.get("2024-12-25").is_none());
    }

    #[test]
    fn test_month_dates() {
        let december = month_dates(2024, 12);
        assert_eq!(december.len(), 31);
        assert_eq!(december[0], NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());

        let february = month_dates(2024, 2); // leap year
        assert_eq!(february.len(), 29);

        assert!(month_dates(2024, 13).is_empty());
    }

    #[test]
    fn test_build_day_data() {
        let entries = sample_entries();
        let dates = month_dates(2024, 12);
        let days = build_day_data(&dates, &entries);

        assert_eq!(days.len(), 31);
        // Break covers Dec 1-3.
        assert_eq!(days[0].entries.len(), 1);
        assert_eq!(days[1].entries.len(), 1);
        assert_eq!(days[2].entries.len(), 1);
        assert!(days[3].is_empty());
        assert_eq!(days[4].entries[0].id, "early");
    }

    #[test]
    fn test_timeline_collapses_break_days() {
        let entries = sample_entries();
        let timeline = timeline_entries(&entries);

        // 3 break-day entries collapse to the single original one.
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].id, "b1");
        assert!(timeline[0].is_original);
        assert_eq!(timeline[1].id, "early");
        assert_eq!(timeline[2].id, "late");
    }
}
