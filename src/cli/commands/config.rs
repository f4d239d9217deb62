use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::success;
use crate::utils::date::{parse_date, parse_weekdays};
use crate::utils::time::parse_duration;
use std::process::Command;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        start_date,
        target,
        non_working,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigLoad)?
            );
        }

        if *edit_config {
            edit_config_file(editor.clone());
        }

        // The remaining flags amend the diary itself, not the config file.
        if start_date.is_none() && target.is_none() && non_working.is_none() {
            return Ok(());
        }

        let mut ledger = open_ledger(cfg)?;

        if let Some(s) = start_date {
            let date = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
            ledger.set_start_date(date);
            success(format!("Diary start date set to {}", date));
        }

        if let Some(s) = target {
            let minutes = parse_duration(s)?;
            ledger.set_day_target_minutes(minutes);
            success(format!("Daily target set to {} minutes", minutes));
        }

        if let Some(s) = non_working {
            let names: Vec<String> = s.split(',').map(|p| p.trim().to_string()).collect();
            let days = parse_weekdays(&names)?;
            ledger.set_non_working_days(days);
            success(format!("Non-working days set to {}", s));
        }

        store::save(&ledger)?;
    }

    Ok(())
}

fn edit_config_file(requested_editor: Option<String>) {
    let path = Config::config_file();

    // Default editor based on the platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    // Use the requested editor if available, otherwise fall back
    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    let status = Command::new(&editor_to_use).arg(&path).status();

    match status {
        Ok(s) if s.success() => {
            println!(
                "✅ Configuration file edited successfully with '{}'",
                editor_to_use
            );
        }
        Ok(_) | Err(_) => {
            eprintln!(
                "⚠️  Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            );
            let fallback_status = Command::new(&default_editor).arg(&path).status();
            match fallback_status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully with fallback '{}'",
                        default_editor
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "❌ Failed to edit configuration file with fallback '{}'",
                        default_editor
                    );
                }
            }
        }
    }
}
