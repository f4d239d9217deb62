#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rworkdiary::core::clock::Clock;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwd() -> Command {
    cargo_bin_cmd!("rworkdiary")
}

/// Create a unique test diary path inside the system temp dir and remove any existing file
pub fn setup_test_ledger(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkdiary.json", name));
    let ledger_path = path.to_string_lossy().to_string();
    fs::remove_file(&ledger_path).ok();
    ledger_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A clock pinned to a fixed instant, for deterministic tests.
pub struct FixedClock {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl FixedClock {
    pub fn at(date: &str, time: &str) -> Self {
        Self {
            date: d(date),
            time: t(time),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time)
    }
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time literal")
}

/// Initialize a diary and record one full working day via the CLI
pub fn init_ledger_with_data(ledger_path: &str) {
    rwd()
        .args(["--ledger", ledger_path, "--test", "init"])
        .assert()
        .success();

    rwd()
        .args([
            "--ledger",
            ledger_path,
            "stamp",
            "in",
            "--date",
            "2025-09-01",
            "--at",
            "09:00",
        ])
        .assert()
        .success();

    rwd()
        .args([
            "--ledger",
            ledger_path,
            "stamp",
            "out",
            "--date",
            "2025-09-01",
            "--at",
            "17:00",
        ])
        .assert()
        .success();
}
