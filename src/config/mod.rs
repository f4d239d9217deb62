use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::utils::date::parse_weekdays;
use crate::utils::time::parse_duration;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the diary snapshot file.
    pub ledger: String,
    /// Target worked time per working day, e.g. "7h" or "7:24". Seeds new
    /// diaries; an existing diary keeps its own value.
    #[serde(default = "default_day_target")]
    pub day_target: String,
    /// Weekdays never flagged as missed clockings. Seeds new diaries.
    #[serde(default = "default_non_working_days")]
    pub non_working_days: Vec<String>,
    /// Whether advisory warnings are printed.
    #[serde(default = "default_warnings")]
    pub warnings: bool,
}

fn default_day_target() -> String {
    "7h".to_string()
}

fn default_non_working_days() -> Vec<String> {
    vec!["sat".to_string(), "sun".to_string()]
}

fn default_warnings() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let ledger_path = Self::ledger_file();
        Self {
            ledger: ledger_path.to_string_lossy().to_string(),
            day_target: default_day_target(),
            non_working_days: default_non_working_days(),
            warnings: default_warnings(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkdiary")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rworkdiary")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkdiary.conf")
    }

    /// Return the full path of the default diary snapshot
    pub fn ledger_file() -> PathBuf {
        Self::config_dir().join("workdiary.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Daily target in minutes, parsed from `day_target`.
    pub fn day_target_minutes(&self) -> AppResult<i64> {
        parse_duration(&self.day_target)
    }

    /// Non-working weekdays, parsed from `non_working_days`.
    pub fn non_working(&self) -> AppResult<Vec<Weekday>> {
        parse_weekdays(&self.non_working_days)
    }

    /// Initialize configuration and diary files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Ledger name: user provided or default
        let ledger_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::ledger_file()
        };

        let config = Config {
            ledger: ledger_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| crate::errors::AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create a fresh diary if none exists yet
        if !ledger_path.exists() {
            let mut ledger = Ledger::new(
                &ledger_path.to_string_lossy(),
                crate::utils::date::today(),
            );
            ledger.set_day_target_minutes(config.day_target_minutes()?);
            ledger.set_non_working_days(config.non_working()?);
            crate::store::save(&ledger)?;
        }

        println!("✅ Diary:       {:?}", ledger_path);

        Ok(())
    }
}
