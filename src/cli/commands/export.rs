use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        from,
        to,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg)?;

        let from = parse_optional_date(from.as_ref())?.unwrap_or_else(|| ledger.start_date());
        let to = parse_optional_date(to.as_ref())?.unwrap_or_else(date::today);

        ExportLogic::export(&ledger, *format, file, from, to, *force)?;
    }
    Ok(())
}
