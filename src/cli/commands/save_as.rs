use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::SaveAs { file } = cmd {
        let mut ledger = open_ledger(cfg)?;
        store::save_as(&mut ledger, file)?;
        success(format!("Diary saved as {}", file));
    }
    Ok(())
}
