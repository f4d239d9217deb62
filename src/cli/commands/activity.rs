use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::date::parse_optional_date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::parse_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity {
        kind,
        duration,
        date: on,
    } = cmd
    {
        let minutes = parse_duration(duration)?;
        let day = parse_optional_date(on.as_ref())?.unwrap_or_else(date::today);

        let mut ledger = open_ledger(cfg)?;
        ledger.add_activity_on(day, *kind, minutes);
        store::save(&ledger)?;

        success(format!(
            "Added {} of {} on {}",
            mins2readable(minutes, false, false),
            kind.label(),
            day
        ));
    }
    Ok(())
}
