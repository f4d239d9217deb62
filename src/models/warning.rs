use crate::models::activity::ActivityKind;
use crate::models::stamp::StampKind;
use crate::utils::formatting::mins2readable;
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

/// Advisory condition raised by the diary. Warnings never abort an
/// operation: the mutation either applied or reduced to a no-op, and the
/// caller decides whether to show them (see the `warnings` config flag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// `remove_stamp` found nothing at the given time.
    StampNotFound { time: NaiveTime },
    /// `remove_activity`/`reduce_activity` found no such kind on the day.
    ActivityNotFound { kind: ActivityKind },
    /// `reduce_activity` asked for more minutes than are recorded.
    ActivityTooShort {
        kind: ActivityKind,
        recorded: i64,
        requested: i64,
    },
    /// The first stamp of the day is an OUT.
    NotClockedIn { first: NaiveTime },
    /// The last stamp of the day is an IN.
    NotClockedOut { last: NaiveTime },
    /// Two chronologically adjacent stamps share the same direction.
    MissedStamp {
        before: NaiveTime,
        after: NaiveTime,
        kind: StampKind,
    },
    /// Working days inside the queried range with no record at all.
    UnrecordedDays { count: usize },
    /// A day view was requested for a date with no record.
    NoRecord { date: NaiveDate },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::StampNotFound { time } => {
                write!(
                    f,
                    "Time stamp {} not recorded on this day. Nothing to remove.",
                    time.format("%H:%M")
                )
            }
            Warning::ActivityNotFound { kind } => {
                write!(
                    f,
                    "{} has not been recorded on this day. Nothing to remove.",
                    kind.label()
                )
            }
            Warning::ActivityTooShort {
                kind,
                recorded,
                requested,
            } => {
                write!(
                    f,
                    "Cannot remove {} from {} ({} recorded). No time deducted.",
                    mins2readable(*requested, false, false),
                    kind.label(),
                    mins2readable(*recorded, false, false)
                )
            }
            Warning::NotClockedIn { first } => {
                write!(f, "Not yet clocked in before {}", first.format("%H:%M"))
            }
            Warning::NotClockedOut { last } => {
                write!(f, "Not yet clocked out after {}", last.format("%H:%M"))
            }
            Warning::MissedStamp {
                before,
                after,
                kind,
            } => {
                write!(
                    f,
                    "Missed time stamp: {} = {}, {} = {}",
                    before.format("%H:%M"),
                    kind.sk_as_str(),
                    after.format("%H:%M"),
                    kind.sk_as_str()
                )
            }
            Warning::UnrecordedDays { count } => {
                write!(f, "There are {} days with missed clockings in the diary", count)
            }
            Warning::NoRecord { date } => {
                write!(f, "No record for day {}", date)
            }
        }
    }
}
