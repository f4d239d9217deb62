use crate::errors::AppResult;
use crate::export::model::DayExport;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes the day rows as a JSON array to the given file.
pub fn write_json(path: &Path, days: &[DayExport]) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, days)?;
    Ok(())
}
