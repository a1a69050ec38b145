//! Pretty output formatting.
//!
//! Labels statuses and types in Chinese, the way the fan-site view does.

use showlog_core::showlog::{DayData, ViewEntry};

/// Format a single entry for display.
pub fn format_entry(entry: &ViewEntry) -> String {
    let mut output = format!("{} [{}]", entry.title, entry.entry_type);
    if !entry.date.is_empty() {
        output.push_str(&format!("\n  日期: {}", entry.date));
    }
    if !entry.time.is_empty() {
        output.push_str(&format!("\n  时间: {}", entry.time));
        if !entry.end_time.is_empty() {
            output.push_str(&format!(" - {}", entry.end_time));
        }
    }
    output.push_str(&format!("\n  地点: {}", entry.location));
    output.push_str(&format!("\n  状态: {}", entry.status));
    if !entry.members.is_empty() {
        output.push_str(&format!("\n  成员: {}", entry.members.join("、")));
    }
    output.push_str(&format!("\n  ID: {}", entry.id));
    output
}

/// Format a list of entries for display.
pub fn format_entries(entries: &[ViewEntry]) -> String {
    if entries.is_empty() {
        return "暂无演出安排".to_string();
    }
    let mut output = format!("演出 ({})\n", entries.len());
    output.push_str(&"-".repeat(40));
    for entry in entries {
        output.push_str(&format!("\n{}", format_entry(entry)));
        output.push('\n');
    }
    output
}

/// Format a calendar month: one line per day that has entries.
pub fn format_month(days: &[DayData]) -> String {
    let busy: Vec<&DayData> = days.iter().filter(|day| !day.is_empty()).collect();
    if busy.is_empty() {
        return "本月暂无演出安排".to_string();
    }

    let mut output = String::new();
    for day in busy {
        output.push_str(&format!("{}\n", day.date.format("%Y-%m-%d")));
        for entry in &day.entries {
            let time = if entry.time.is_empty() {
                String::new()
            } else if entry.end_time.is_empty() {
                format!(" {}", entry.time)
            } else {
                format!(" {} - {}", entry.time, entry.end_time)
            };
            output.push_str(&format!(
                "  {} [{}] {}{}\n",
                entry.title,
                entry.entry_type,
                entry.status,
                time
            ));
        }
    }
    output.pop();
    output
}

/// Format the current break state.
pub fn format_break_status(on_break: bool) -> &'static str {
    if on_break {
        "当前状态: 暂休中"
    } else {
        "当前状态: 未暂休"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use showlog_core::showlog::{show_tz, transform, RawShowLog};

    fn sample_entry() -> ViewEntry {
        let start = show_tz()
            .with_ymd_and_hms(2024, 12, 5, 19, 30, 0)
            .unwrap()
            .timestamp_millis();
        let now = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        let records = vec![RawShowLog::new("1", "定期公演", "星梦剧院")
            .with_start(start)
            .with_end(start + 90 * 60 * 1000)];
        transform(&records, now).remove(0)
    }

    #[test]
    fn test_format_entry() {
        let text = format_entry(&sample_entry());
        assert!(text.contains("定期公演"));
        assert!(text.contains("2024-12-05"));
        assert!(text.contains("19:30 - 21:00"));
        assert!(text.contains("即将开始"));
        assert!(text.contains("夏沫"));
    }

    #[test]
    fn test_format_entry_without_date() {
        let now = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        let entry = transform(&[RawShowLog::new("1", "t", "l")], now).remove(0);
        let text = format_entry(&entry);
        assert!(!text.contains("日期"));
        assert!(!text.contains("时间"));
    }

    #[test]
    fn test_format_entries_empty() {
        assert_eq!(format_entries(&[]), "暂无演出安排");
    }

    #[test]
    fn test_format_month() {
        let entry = sample_entry();
        let days = vec![
            DayData::new(NaiveDate::from_ymd_opt(2024, 12, 4).unwrap(), vec![]),
            DayData::new(
                NaiveDate::from_ymd_opt(2024, 12, 5).unwrap(),
                vec![entry],
            ),
        ];
        let text = format_month(&days);
        assert!(text.contains("2024-12-05"));
        assert!(!text.contains("2024-12-04"));
    }

    #[test]
    fn test_format_break_status() {
        assert!(format_break_status(true).contains("暂休中"));
        assert!(format_break_status(false).contains("未暂休"));
    }
}
