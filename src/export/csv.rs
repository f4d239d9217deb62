use crate::export::model::{DayExport, get_headers};
use csv::Writer;
use std::path::Path;

/// Writes the day rows as CSV to the given file.
pub fn write_csv(path: &Path, days: &[DayExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for day in days {
        wtr.write_record(&[
            day.date.clone(),
            day.weekday.clone(),
            day.stamps.clone(),
            day.stamp_minutes.to_string(),
            day.activity_minutes.to_string(),
            day.worked_minutes.to_string(),
            day.target_minutes.to_string(),
            day.delta_minutes.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
