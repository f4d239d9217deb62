use chrono::{Local, NaiveDate, NaiveTime, Timelike};

/// Source of "today" and "right now" for clocking operations. Abstracted so
/// tests can pin the calendar; the CLI uses [`SystemClock`].
pub trait Clock {
    /// Current date and time of day, truncated to the minute.
    fn now(&self) -> (NaiveDate, NaiveTime);

    fn today(&self) -> NaiveDate {
        self.now().0
    }
}

/// The local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> (NaiveDate, NaiveTime) {
        let now = Local::now();
        (now.date_naive(), truncate_to_minute(now.time()))
    }
}

/// Drops seconds and nanoseconds, so stamps compare at HH:MM precision.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}
