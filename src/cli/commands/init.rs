use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty diary snapshot (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.ledger {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing rworkdiary…");
    println!("📄 Config file : {}", path.display());
    println!("📓 Diary       : {}", &cfg.ledger);
    println!("🎉 rworkdiary initialization completed!");

    Ok(())
}
