use crate::core::clock::Clock;
use crate::models::activity::ActivityKind;
use crate::models::day::DayRecord;
use crate::models::stamp::StampKind;
use crate::models::summary::{BalanceReport, BalanceRow, WeekRow};
use crate::models::warning::Warning;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Target worked minutes per working day unless configured otherwise:
/// 35 contractual hours spread over five days.
pub const DEFAULT_DAY_TARGET_MINUTES: i64 = 7 * 60;

/// The whole diary: one [`DayRecord`] per recorded date, the balance anchor
/// and target, and the weekdays that never count as missed.
///
/// Day records are materialized lazily: the first operation that touches a
/// date creates its record, and a record is never dropped afterwards, even
/// when emptied again. Range queries depend on which dates exist, so
/// materialization is part of the contract (see [`Ledger::get`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    days: BTreeMap<NaiveDate, DayRecord>,
    start_date: NaiveDate,
    day_target_minutes: i64,
    non_working_days: Vec<Weekday>,
    file_name: String,
    balance_minutes: i64,
}

impl Ledger {
    /// A fresh diary anchored at `start_date`, with the default 7h target
    /// and Saturday/Sunday as regular non-working days.
    pub fn new(file_name: &str, start_date: NaiveDate) -> Self {
        Self {
            days: BTreeMap::new(),
            start_date,
            day_target_minutes: DEFAULT_DAY_TARGET_MINUTES,
            non_working_days: vec![Weekday::Sat, Weekday::Sun],
            file_name: file_name.to_string(),
            balance_minutes: 0,
        }
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn day_target_minutes(&self) -> i64 {
        self.day_target_minutes
    }

    pub fn non_working_days(&self) -> &[Weekday] {
        &self.non_working_days
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Cached diary-wide balance over every recorded day.
    pub fn balance_minutes(&self) -> i64 {
        self.balance_minutes
    }

    /// Recorded days in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.values()
    }

    pub fn set_file_name(&mut self, file_name: &str) {
        self.file_name = file_name.to_string();
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
        self.recalculate_balance();
    }

    pub fn set_day_target_minutes(&mut self, minutes: i64) {
        self.day_target_minutes = minutes;
        self.recalculate_balance();
    }

    pub fn set_non_working_days(&mut self, days: Vec<Weekday>) {
        self.non_working_days = days;
    }

    // ---------------------------
    // Locate-or-create
    // ---------------------------

    /// Returns the record for `date`, creating an empty one first if the
    /// date has never been touched. After this call the date is recorded,
    /// which in turn removes it from unrecorded-day detection; callers
    /// that only want to look should use [`Ledger::day`].
    pub fn get(&mut self, date: NaiveDate) -> &mut DayRecord {
        self.days.entry(date).or_insert_with(|| DayRecord::new(date))
    }

    /// Read-only lookup; never materializes.
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    // ---------------------------
    // Clocking
    // ---------------------------

    /// Records a stamp for right now. With `kind` the direction is explicit;
    /// without it the direction is inferred from today's chronologically
    /// preceding stamp. Returns what was recorded, and where.
    pub fn stamp(
        &mut self,
        clock: &dyn Clock,
        kind: Option<StampKind>,
    ) -> (NaiveDate, NaiveTime, StampKind) {
        let (today, now) = clock.now();
        let recorded = self.stamp_on(today, now, kind);
        (today, now, recorded)
    }

    /// Records a stamp on an arbitrary date and time (the amendment path).
    pub fn stamp_on(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        kind: Option<StampKind>,
    ) -> StampKind {
        let record = self.get(date);
        let recorded = match kind {
            Some(kind) => {
                record.add_stamp(time, kind);
                kind
            }
            None => record.add_stamp_auto(time),
        };
        self.recalculate_balance();
        recorded
    }

    /// Removes the stamp at `time` on `date`. The date is materialized even
    /// when the stamp is missing, matching the amend flow.
    pub fn remove_stamp(&mut self, date: NaiveDate, time: NaiveTime) -> Option<Warning> {
        let warning = self.get(date).remove_stamp(time);
        self.recalculate_balance();
        warning
    }

    // ---------------------------
    // Activities
    // ---------------------------

    /// Credits an activity to today.
    pub fn record_activity(
        &mut self,
        clock: &dyn Clock,
        kind: ActivityKind,
        minutes: i64,
    ) -> NaiveDate {
        let today = clock.today();
        self.add_activity_on(today, kind, minutes);
        today
    }

    pub fn add_activity_on(&mut self, date: NaiveDate, kind: ActivityKind, minutes: i64) {
        self.get(date).add_activity(kind, minutes);
        self.recalculate_balance();
    }

    pub fn remove_activity_on(&mut self, date: NaiveDate, kind: ActivityKind) -> Option<Warning> {
        let warning = self.get(date).remove_activity(kind);
        self.recalculate_balance();
        warning
    }

    pub fn reduce_activity_on(
        &mut self,
        date: NaiveDate,
        kind: ActivityKind,
        minutes: i64,
    ) -> Option<Warning> {
        let warning = self.get(date).reduce_activity(kind, minutes);
        self.recalculate_balance();
        warning
    }

    // ---------------------------
    // Balances & ranges
    // ---------------------------

    /// Worked-minus-target over every recorded day, refreshing the cache.
    pub fn recalculate_balance(&mut self) -> i64 {
        self.balance_minutes = self
            .days
            .values()
            .map(|d| d.worked_minutes() - self.day_target_minutes)
            .sum();
        self.balance_minutes
    }

    /// Balance over `[start, end]` inclusive. Only recorded days are
    /// scored: a day with no record contributes zero, not a shortfall.
    /// Rows list the recorded days that are over or under target, in date
    /// order. Working days in the range with no record at all produce an
    /// advisory [`Warning::UnrecordedDays`].
    pub fn day_range(&self, start: NaiveDate, end: NaiveDate) -> (BalanceReport, Vec<Warning>) {
        let mut report = BalanceReport::default();

        for record in self.days.range(start..=end).map(|(_, r)| r) {
            let delta = record.worked_minutes() - self.day_target_minutes;
            report.balance_minutes += delta;
            if delta != 0 {
                report.rows.push(BalanceRow {
                    date: record.date(),
                    worked_minutes: record.worked_minutes(),
                    delta_minutes: delta,
                });
            }
        }

        let missed = self.unrecorded_days(start, end);
        let warnings = if missed.is_empty() {
            Vec::new()
        } else {
            vec![Warning::UnrecordedDays {
                count: missed.len(),
            }]
        };

        (report, warnings)
    }

    /// Balance from the diary's start date up to `end`.
    pub fn balance_to(&self, end: NaiveDate) -> (BalanceReport, Vec<Warning>) {
        self.day_range(self.start_date, end)
    }

    /// Balance from the diary's start date up to today.
    pub fn balance_today(&self, clock: &dyn Clock) -> (BalanceReport, Vec<Warning>) {
        self.balance_to(clock.today())
    }

    /// Dates in `[from, to]` inclusive with no record whose weekday is not
    /// a regular non-working day. These are the days the user forgot to
    /// clock; weekends and other configured days off are never flagged.
    pub fn unrecorded_days(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut missing = Vec::new();
        let mut date = from;
        while date <= to {
            if !self.days.contains_key(&date) && !self.non_working_days.contains(&date.weekday()) {
                missing.push(date);
            }
            let Some(next) = date.succ_opt() else { break };
            date = next;
        }
        missing
    }

    /// Unrecorded days from the diary's start date up to today.
    pub fn unrecorded_to_date(&self, clock: &dyn Clock) -> Vec<NaiveDate> {
        self.unrecorded_days(self.start_date, clock.today())
    }

    // ---------------------------
    // Week view
    // ---------------------------

    /// Monday-to-Friday worked totals for the week containing `anchor`
    /// (ISO weeks, Monday first). Read-only: empty days show up as `None`
    /// and are not materialized.
    pub fn week_view(&self, anchor: NaiveDate) -> Vec<WeekRow> {
        let monday = anchor - chrono::Duration::days(i64::from(anchor.weekday().num_days_from_monday()));

        (0..5)
            .map(|i| {
                let date = monday + chrono::Duration::days(i);
                WeekRow {
                    date,
                    worked_minutes: self.days.get(&date).map(|d| d.worked_minutes()),
                }
            })
            .collect()
    }
}
