//! Durable persistence of the diary. The whole ledger is snapshotted as one
//! JSON document under its `file_name`; the snapshot is opaque to the rest
//! of the application, which only ever saves or loads it atomically.

use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::fs;

/// Serializes the ledger to its own `file_name`. The parent directory is
/// created on first save.
pub fn save(ledger: &Ledger) -> AppResult<()> {
    let path = expand_tilde(ledger.file_name());
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    fs::write(&path, json)?;
    Ok(())
}

/// Re-points the ledger at a new identifier, then saves. The previous file
/// is left in place.
pub fn save_as(ledger: &mut Ledger, file_name: &str) -> AppResult<()> {
    ledger.set_file_name(file_name);
    save(ledger)
}

/// Loads the ledger stored at `file_name`. A missing file is not an error:
/// a fresh diary starting `today` is created, saved there, and returned.
pub fn load_or_create(file_name: &str, today: chrono::NaiveDate) -> AppResult<Ledger> {
    let path = expand_tilde(file_name);
    if !path.exists() {
        let mut ledger = Ledger::new(file_name, today);
        save_as(&mut ledger, file_name)?;
        return Ok(ledger);
    }
    load(file_name)
}

/// Loads the ledger stored at `file_name`, failing if it does not exist or
/// does not decode.
pub fn load(file_name: &str) -> AppResult<Ledger> {
    let path = expand_tilde(file_name);
    let json = fs::read_to_string(&path)?;
    let mut ledger: Ledger = serde_json::from_str(&json)?;
    // The snapshot may have been copied to a new location by hand.
    ledger.set_file_name(file_name);
    Ok(ledger)
}
