use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::date::parse_optional_date;
use crate::utils::weekday_str;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Missing { from, to } = cmd {
        let ledger = open_ledger(cfg)?;

        let from = parse_optional_date(from.as_ref())?.unwrap_or_else(|| ledger.start_date());
        let to = parse_optional_date(to.as_ref())?.unwrap_or_else(date::today);

        let missing = ledger.unrecorded_days(from, to);

        if missing.is_empty() {
            info(format!("No missed clockings between {} and {}.", from, to));
            return Ok(());
        }

        println!("Days with no record ({} to {}):", from, to);
        for day in &missing {
            println!("  {} ({})", day, weekday_str(*day));
        }
        println!("{} days in total.", missing.len());
    }
    Ok(())
}
