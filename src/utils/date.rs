use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    if let Some(s) = input {
        let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        Ok(Some(d))
    } else {
        Ok(None)
    }
}

/// Parses weekday names ("mon", "saturday", ...) as accepted by chrono.
pub fn parse_weekdays(names: &[String]) -> AppResult<Vec<Weekday>> {
    names
        .iter()
        .map(|s| {
            s.parse::<Weekday>()
                .map_err(|_| AppError::InvalidWeekday(s.to_string()))
        })
        .collect()
}

pub fn weekday_str(d: NaiveDate) -> &'static str {
    use chrono::Datelike;
    match d.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
