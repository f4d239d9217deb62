use crate::models::activity::ActivityKind;
use crate::models::stamp::StampKind;
use crate::models::warning::Warning;
use crate::utils::time::minutes_between;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar day of the diary: the in/out stamps recorded by the user,
/// the activities credited towards the day (leave, training, ...) and the
/// cached worked total derived from both.
///
/// Every mutating method recomputes `worked_minutes`, so the invariant
/// `worked_minutes == total_from_stamps() + total_from_activities()` holds
/// whenever a method returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    date: NaiveDate,
    stamps: BTreeMap<NaiveTime, StampKind>,
    activities: BTreeMap<ActivityKind, i64>,
    worked_minutes: i64,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            stamps: BTreeMap::new(),
            activities: BTreeMap::new(),
            worked_minutes: 0,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn stamps(&self) -> &BTreeMap<NaiveTime, StampKind> {
        &self.stamps
    }

    /// Accumulated minutes per activity kind.
    pub fn activities(&self) -> &BTreeMap<ActivityKind, i64> {
        &self.activities
    }

    /// Cached worked total. Use [`DayRecord::audit`] to surface malformed
    /// stamp sequences alongside this value.
    pub fn worked_minutes(&self) -> i64 {
        self.worked_minutes
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty() && self.activities.is_empty()
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Records a stamp at the given time of day. A stamp already present at
    /// exactly that time is overwritten: last write wins.
    pub fn add_stamp(&mut self, time: NaiveTime, kind: StampKind) {
        self.stamps.insert(time, kind);
        self.recalculate();
    }

    /// Records a stamp, inferring the direction from the latest stamp
    /// strictly before `time`: none or OUT means this one is an IN,
    /// IN means this one is an OUT. The neighbour is the chronological
    /// one, so inserting out of order still alternates sensibly.
    pub fn add_stamp_auto(&mut self, time: NaiveTime) -> StampKind {
        let kind = match self.stamps.range(..time).next_back() {
            None => StampKind::In,
            Some((_, StampKind::Out)) => StampKind::In,
            Some((_, StampKind::In)) => StampKind::Out,
        };
        self.add_stamp(time, kind);
        kind
    }

    /// Removes the stamp at exactly `time`. Removing a time that was never
    /// stamped is not an error: the day is left untouched and an advisory
    /// warning is returned.
    pub fn remove_stamp(&mut self, time: NaiveTime) -> Option<Warning> {
        if self.stamps.remove(&time).is_some() {
            self.recalculate();
            None
        } else {
            Some(Warning::StampNotFound { time })
        }
    }

    /// Credits `minutes` of the given activity to the day, adding to the
    /// accumulated total if the kind is already present.
    pub fn add_activity(&mut self, kind: ActivityKind, minutes: i64) {
        *self.activities.entry(kind).or_insert(0) += minutes;
        self.recalculate();
    }

    /// Removes the activity kind entirely.
    pub fn remove_activity(&mut self, kind: ActivityKind) -> Option<Warning> {
        if self.activities.remove(&kind).is_some() {
            self.recalculate();
            None
        } else {
            Some(Warning::ActivityNotFound { kind })
        }
    }

    /// Subtracts `minutes` from the activity's accumulated total, but only
    /// if at least that much is recorded. The total is never clamped: asking
    /// for too much deducts nothing and returns a warning instead.
    pub fn reduce_activity(&mut self, kind: ActivityKind, minutes: i64) -> Option<Warning> {
        match self.activities.get_mut(&kind) {
            None => Some(Warning::ActivityNotFound { kind }),
            Some(recorded) if *recorded < minutes => Some(Warning::ActivityTooShort {
                kind,
                recorded: *recorded,
                requested: minutes,
            }),
            Some(recorded) => {
                *recorded -= minutes;
                self.recalculate();
                None
            }
        }
    }

    /// Updates the cached worked total. Called by every mutating method and
    /// safe to call directly: the two totals are pure functions of the
    /// current stamps and activities.
    pub fn recalculate(&mut self) -> i64 {
        self.worked_minutes = self.total_from_stamps() + self.total_from_activities();
        self.worked_minutes
    }

    // ---------------------------
    // Totals
    // ---------------------------

    /// Pairs the day's stamps into worked intervals and sums them.
    ///
    /// The scan walks the stamps in time order holding a current direction
    /// that starts at OUT. A stamp in the opposite direction flips the
    /// state: an IN opens an interval, an OUT closes it and adds its length
    /// to the total. A stamp repeating the current direction (IN-IN or
    /// OUT-OUT means a clocking was missed) is skipped without advancing
    /// the state, so a later stamp still closes against the last change.
    /// A trailing unmatched IN is simply never added.
    pub fn total_from_stamps(&self) -> i64 {
        let mut state = StampKind::Out;
        let mut total = 0;
        let mut interval_start: Option<NaiveTime> = None;

        for (&time, &kind) in &self.stamps {
            if kind != state {
                state = kind;
                match kind {
                    StampKind::In => interval_start = Some(time),
                    StampKind::Out => {
                        if let Some(start) = interval_start.take() {
                            total += minutes_between(start, time);
                        }
                    }
                }
            }
        }

        total
    }

    /// Sum of all activity minutes for the day.
    pub fn total_from_activities(&self) -> i64 {
        self.activities.values().sum()
    }

    // ---------------------------
    // Checks
    // ---------------------------

    /// Advisory check of the stamp sequence: the day should start with an
    /// IN, end with an OUT, and alternate in between. Adjacent stamps
    /// sharing a direction are each reported as a missed clocking. Never
    /// touches state and never aborts anything.
    pub fn audit(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();

        let (Some((&first_time, first_kind)), Some((&last_time, last_kind))) =
            (self.stamps.first_key_value(), self.stamps.last_key_value())
        else {
            return warnings;
        };

        if first_kind.is_out() {
            warnings.push(Warning::NotClockedIn { first: first_time });
        }

        let entries: Vec<(NaiveTime, StampKind)> =
            self.stamps.iter().map(|(&t, &k)| (t, k)).collect();
        for pair in entries.windows(2) {
            let (before, kind) = pair[0];
            let (after, next_kind) = pair[1];
            if kind == next_kind {
                warnings.push(Warning::MissedStamp { before, after, kind });
            }
        }

        if last_kind.is_in() {
            warnings.push(Warning::NotClockedOut { last: last_time });
        }

        warnings
    }
}
