pub mod activity;
pub mod balance;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod missing;
pub mod save_as;
pub mod stamp;

use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::store;
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Opens the configured diary. A missing snapshot is not an error: a fresh
/// diary is created there, seeded with the config's target and non-working
/// days, and saved.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<Ledger> {
    let existed = expand_tilde(&cfg.ledger).exists();
    let mut ledger = store::load_or_create(&cfg.ledger, date::today())?;

    if !existed {
        ledger.set_day_target_minutes(cfg.day_target_minutes()?);
        ledger.set_non_working_days(cfg.non_working()?);
        store::save(&ledger)?;
    }

    Ok(ledger)
}
