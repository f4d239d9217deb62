mod common;
use common::{d, t};
use rworkdiary::models::activity::ActivityKind;
use rworkdiary::models::day::DayRecord;
use rworkdiary::models::stamp::StampKind;
use rworkdiary::models::warning::Warning;

#[test]
fn new_record_is_empty() {
    let record = DayRecord::new(d("2025-09-01"));

    assert_eq!(record.date(), d("2025-09-01"));
    assert!(record.stamps().is_empty());
    assert!(record.activities().is_empty());
    assert_eq!(record.worked_minutes(), 0);
    assert!(record.is_empty());
}

#[test]
fn totals_are_zero_on_empty_record() {
    let mut record = DayRecord::new(d("2025-09-01"));

    assert_eq!(record.total_from_stamps(), 0);
    assert_eq!(record.total_from_activities(), 0);
    assert_eq!(record.recalculate(), 0);
    assert!(record.audit().is_empty());
}

#[test]
fn simple_pair_sums_to_interval() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_stamp(t("09:00"), StampKind::In);
    record.add_stamp(t("17:00"), StampKind::Out);

    assert_eq!(record.total_from_stamps(), 480);
    assert_eq!(record.worked_minutes(), 480);
    assert!(record.audit().is_empty());
}

#[test]
fn repeated_in_is_skipped_and_audited() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_stamp(t("09:00"), StampKind::In);
    record.add_stamp(t("12:00"), StampKind::In);
    record.add_stamp(t("17:00"), StampKind::Out);

    // The 12:00 IN repeats the current direction: it is ignored and the
    // interval still closes 09:00 -> 17:00.
    assert_eq!(record.total_from_stamps(), 480);

    let warnings = record.audit();
    assert_eq!(
        warnings,
        vec![Warning::MissedStamp {
            before: t("09:00"),
            after: t("12:00"),
            kind: StampKind::In,
        }]
    );
}

#[test]
fn every_adjacent_repeat_is_audited() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_stamp(t("09:00"), StampKind::In);
    record.add_stamp(t("12:00"), StampKind::In);
    record.add_stamp(t("13:00"), StampKind::In);
    record.add_stamp(t("17:00"), StampKind::Out);

    assert_eq!(record.total_from_stamps(), 480);

    let warnings = record.audit();
    assert_eq!(warnings.len(), 2);
    assert!(matches!(warnings[0], Warning::MissedStamp { kind: StampKind::In, .. }));
    assert!(matches!(warnings[1], Warning::MissedStamp { kind: StampKind::In, .. }));
}

#[test]
fn unmatched_trailing_in_contributes_nothing() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_stamp(t("09:00"), StampKind::In);

    assert_eq!(record.total_from_stamps(), 0);
    assert_eq!(record.worked_minutes(), 0);
    assert_eq!(
        record.audit(),
        vec![Warning::NotClockedOut { last: t("09:00") }]
    );
}

#[test]
fn leading_out_is_audited() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_stamp(t("08:00"), StampKind::Out);
    record.add_stamp(t("09:00"), StampKind::In);
    record.add_stamp(t("17:00"), StampKind::Out);

    // The leading OUT matches the initial direction and pairs nothing.
    assert_eq!(record.total_from_stamps(), 480);

    let warnings = record.audit();
    assert!(warnings.contains(&Warning::NotClockedIn { first: t("08:00") }));
}

#[test]
fn auto_stamp_alternates_by_time_order() {
    let mut record = DayRecord::new(d("2025-09-01"));

    // First clocking of the day: assumed IN.
    assert_eq!(record.add_stamp_auto(t("09:00")), StampKind::In);
    assert_eq!(record.worked_minutes(), 0);

    // Previous clocking was IN: assumed OUT.
    assert_eq!(record.add_stamp_auto(t("10:00")), StampKind::Out);
    assert_eq!(record.worked_minutes(), 60);

    // Inserted out of order between the two: its chronological neighbour
    // is the 09:00 IN, so this one is an OUT and closes at 09:30.
    assert_eq!(record.add_stamp_auto(t("09:30")), StampKind::Out);
    assert_eq!(record.worked_minutes(), 30);
}

#[test]
fn stamp_at_same_time_overwrites_direction() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_stamp(t("09:00"), StampKind::In);
    record.add_stamp(t("09:00"), StampKind::Out);

    assert_eq!(record.stamps().len(), 1);
    assert_eq!(record.stamps()[&t("09:00")], StampKind::Out);
}

#[test]
fn remove_stamp_recalculates_or_warns() {
    let mut record = DayRecord::new(d("2025-09-01"));

    // Removing from an empty day warns and changes nothing.
    assert_eq!(
        record.remove_stamp(t("09:00")),
        Some(Warning::StampNotFound { time: t("09:00") })
    );

    record.add_stamp(t("09:00"), StampKind::In);
    record.add_stamp(t("10:00"), StampKind::Out);
    record.add_stamp(t("09:30"), StampKind::Out);
    assert_eq!(record.worked_minutes(), 30);

    assert_eq!(record.remove_stamp(t("09:30")), None);
    assert_eq!(record.worked_minutes(), 60);
}

#[test]
fn activities_accumulate_per_kind() {
    let mut record = DayRecord::new(d("2025-09-01"));

    record.add_activity(ActivityKind::AnnualLeave, 180);
    assert_eq!(record.worked_minutes(), 180);
    assert_eq!(record.activities().len(), 1);

    record.add_activity(ActivityKind::Sick, 60);
    assert_eq!(record.worked_minutes(), 240);
    assert_eq!(record.activities().len(), 2);

    // Re-adding a kind adds to it instead of replacing it.
    record.add_activity(ActivityKind::AnnualLeave, 180);
    assert_eq!(record.activities().len(), 2);
    assert_eq!(record.activities()[&ActivityKind::AnnualLeave], 360);
    assert_eq!(record.worked_minutes(), 420);
}

#[test]
fn remove_and_reduce_activities() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_activity(ActivityKind::AnnualLeave, 360);
    record.add_activity(ActivityKind::Sick, 60);

    assert_eq!(record.remove_activity(ActivityKind::AnnualLeave), None);
    assert_eq!(record.activities().len(), 1);
    assert_eq!(record.worked_minutes(), 60);

    assert_eq!(record.reduce_activity(ActivityKind::Sick, 30), None);
    assert_eq!(record.activities()[&ActivityKind::Sick], 30);
    assert_eq!(record.total_from_activities(), 30);

    // Absent kinds warn and change nothing.
    assert_eq!(
        record.remove_activity(ActivityKind::Training),
        Some(Warning::ActivityNotFound {
            kind: ActivityKind::Training
        })
    );
    assert_eq!(
        record.reduce_activity(ActivityKind::Training, 20),
        Some(Warning::ActivityNotFound {
            kind: ActivityKind::Training
        })
    );
}

#[test]
fn reduce_activity_never_goes_negative() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_activity(ActivityKind::Sick, 30);

    // Asking for more than is recorded deducts nothing, not even partially.
    assert_eq!(
        record.reduce_activity(ActivityKind::Sick, 1800),
        Some(Warning::ActivityTooShort {
            kind: ActivityKind::Sick,
            recorded: 30,
            requested: 1800,
        })
    );
    assert_eq!(record.activities()[&ActivityKind::Sick], 30);
    assert_eq!(record.worked_minutes(), 30);
}

#[test]
fn recalculate_is_idempotent_and_matches_totals() {
    let mut record = DayRecord::new(d("2025-09-01"));
    record.add_stamp_auto(t("09:00"));
    record.add_stamp_auto(t("09:15"));
    record.add_stamp_auto(t("10:00"));
    record.add_stamp_auto(t("10:15"));
    record.add_activity(ActivityKind::Sick, 30);
    record.add_activity(ActivityKind::AnnualLeave, 60);

    let cached = record.worked_minutes();
    assert_eq!(record.total_from_stamps(), 30);
    assert_eq!(record.total_from_activities(), 90);
    assert_eq!(record.recalculate(), 120);
    assert_eq!(record.worked_minutes(), cached);
    assert_eq!(
        record.worked_minutes(),
        record.total_from_stamps() + record.total_from_activities()
    );
}
