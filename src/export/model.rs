use crate::models::day::DayRecord;
use crate::utils::date::weekday_str;
use serde::Serialize;

/// Flat per-day row for export.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    /// Stamps of the day in time order, e.g. "09:00 in; 17:00 out".
    pub stamps: String,
    pub stamp_minutes: i64,
    pub activity_minutes: i64,
    pub worked_minutes: i64,
    pub target_minutes: i64,
    pub delta_minutes: i64,
}

impl DayExport {
    pub fn from_record(record: &DayRecord, target_minutes: i64) -> Self {
        let stamps = record
            .stamps()
            .iter()
            .map(|(t, k)| format!("{} {}", t.format("%H:%M"), k.sk_as_str()))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            date: record.date().format("%Y-%m-%d").to_string(),
            weekday: weekday_str(record.date()).to_string(),
            stamps,
            stamp_minutes: record.total_from_stamps(),
            activity_minutes: record.total_from_activities(),
            worked_minutes: record.worked_minutes(),
            target_minutes,
            delta_minutes: record.worked_minutes() - target_minutes,
        }
    }
}

/// Header for CSV export.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "weekday",
        "stamps",
        "stamp_minutes",
        "activity_minutes",
        "worked_minutes",
        "target_minutes",
        "delta_minutes",
    ]
}
