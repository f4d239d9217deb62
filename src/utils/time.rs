//! Time utilities: parsing HH:MM, duration computations, etc.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parses a user-typed duration into minutes. Accepts the clock form
/// `H:MM`/`HH:MM` (hours below 24) and the short form `8h`, `7h30m`, `45m`.
pub fn parse_duration_minutes(s: &str) -> Option<i64> {
    let s = s.trim();

    let clock = Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap();
    if let Some(c) = clock.captures(s) {
        let hours: i64 = c[1].parse().ok()?;
        let minutes: i64 = c[2].parse().ok()?;
        if hours < 24 && minutes < 60 {
            return Some(hours * 60 + minutes);
        }
        return None;
    }

    let short = Regex::new(r"^(?:(\d+)h)?\s*(?:(\d+)m)?$").unwrap();
    if let Some(c) = short.captures(s) {
        if c.get(1).is_none() && c.get(2).is_none() {
            return None;
        }
        let hours: i64 = c.get(1).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
        let minutes: i64 = c.get(2).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
        return Some(hours * 60 + minutes);
    }

    None
}

pub fn parse_duration(s: &str) -> AppResult<i64> {
    parse_duration_minutes(s).ok_or_else(|| AppError::InvalidDuration(s.to_string()))
}
