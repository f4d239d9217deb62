use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::DayExport;
use crate::export::notify_export_success;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Exports the recorded days of `[from, to]` as flat per-day rows.
    pub fn export(
        ledger: &Ledger,
        format: ExportFormat,
        file: &str,
        from: NaiveDate,
        to: NaiveDate,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let target = ledger.day_target_minutes();
        let days: Vec<DayExport> = ledger
            .days()
            .filter(|d| d.date() >= from && d.date() <= to)
            .map(|d| DayExport::from_record(d, target))
            .collect();

        if days.is_empty() {
            warning("No recorded days found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(path, &days).map_err(AppError::Io)?,
            ExportFormat::Json => write_json(path, &days)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
