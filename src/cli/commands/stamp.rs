use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{show_warnings, success};
use crate::utils::date::parse_optional_date;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stamp { kind, date: on, at } = cmd {
        let mut ledger = open_ledger(cfg)?;

        let at_time = parse_optional_time(at.as_ref())?;
        let on_date = parse_optional_date(on.as_ref())?;

        // --date without --at is rejected by clap, so a date here always
        // comes with an explicit time.
        let (day, time, recorded) = if let Some(time) = at_time {
            let day = on_date.unwrap_or_else(date::today);
            (day, time, ledger.stamp_on(day, time, *kind))
        } else {
            ledger.stamp(&SystemClock, *kind)
        };

        store::save(&ledger)?;

        success(format!(
            "{} at {} on {}",
            recorded.label(),
            time.format("%H:%M"),
            day
        ));

        if let Some(record) = ledger.day(day) {
            show_warnings(&record.audit(), cfg.warnings);
        }
    }
    Ok(())
}
