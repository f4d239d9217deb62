use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::{info, show_warning};
use crate::utils::date::parse_date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::{parse_duration, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date,
        at,
        activity,
        duration,
    } = cmd
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        if at.is_none() && activity.is_none() {
            return Err(AppError::Other(
                "Nothing to do: specify --at or --activity.".into(),
            ));
        }

        let mut ledger = open_ledger(cfg)?;

        if let Some(time) = parse_optional_time(at.as_ref())? {
            match ledger.remove_stamp(day, time) {
                None => info(format!(
                    "Removed stamp at {} on {}",
                    time.format("%H:%M"),
                    day
                )),
                w => show_warning(w, cfg.warnings),
            }
        }

        if let Some(kind) = activity {
            match duration {
                Some(s) => {
                    let minutes = parse_duration(s)?;
                    match ledger.reduce_activity_on(day, *kind, minutes) {
                        None => info(format!(
                            "Deducted {} from {} on {}",
                            mins2readable(minutes, false, false),
                            kind.label(),
                            day
                        )),
                        w => show_warning(w, cfg.warnings),
                    }
                }
                None => match ledger.remove_activity_on(day, *kind) {
                    None => info(format!("Removed {} on {}", kind.label(), day)),
                    w => show_warning(w, cfg.warnings),
                },
            }
        }

        store::save(&ledger)?;
    }
    Ok(())
}
