mod common;
use common::{d, setup_test_ledger, t};
use rworkdiary::core::ledger::Ledger;
use rworkdiary::models::activity::ActivityKind;
use rworkdiary::models::stamp::StampKind;
use rworkdiary::store;

fn populated_ledger(file_name: &str) -> Ledger {
    let mut ledger = Ledger::new(file_name, d("2025-09-01"));
    ledger.set_day_target_minutes(444);
    ledger.set_non_working_days(vec![chrono::Weekday::Sun]);

    ledger.stamp_on(d("2025-09-01"), t("09:00"), Some(StampKind::In));
    ledger.stamp_on(d("2025-09-01"), t("17:00"), Some(StampKind::Out));
    ledger.stamp_on(d("2025-09-02"), t("08:30"), None);
    ledger.add_activity_on(d("2025-09-02"), ActivityKind::Training, 90);
    ledger.add_activity_on(d("2025-09-02"), ActivityKind::AnnualLeave, 210);

    ledger
}

#[test]
fn round_trip_preserves_the_whole_diary() {
    let path = setup_test_ledger("round_trip");
    let original = populated_ledger(&path);

    store::save(&original).expect("save diary");
    let loaded = store::load(&path).expect("load diary");

    assert_eq!(loaded.start_date(), original.start_date());
    assert_eq!(loaded.day_target_minutes(), original.day_target_minutes());
    assert_eq!(loaded.non_working_days(), original.non_working_days());
    assert_eq!(loaded.file_name(), original.file_name());
    assert_eq!(loaded.balance_minutes(), original.balance_minutes());

    let dates: Vec<_> = loaded.days().map(|r| r.date()).collect();
    assert_eq!(dates, vec![d("2025-09-01"), d("2025-09-02")]);

    for (got, want) in loaded.days().zip(original.days()) {
        assert_eq!(got.stamps(), want.stamps());
        assert_eq!(got.activities(), want.activities());
        assert_eq!(got.worked_minutes(), want.worked_minutes());
    }
}

#[test]
fn load_or_create_makes_a_fresh_diary() {
    let path = setup_test_ledger("load_or_create");

    let ledger = store::load_or_create(&path, d("2025-09-01")).expect("create diary");
    assert_eq!(ledger.start_date(), d("2025-09-01"));
    assert_eq!(ledger.days().count(), 0);

    // The fresh diary was saved, so a second load finds it.
    let again = store::load(&path).expect("reload diary");
    assert_eq!(again.start_date(), d("2025-09-01"));
}

#[test]
fn load_or_create_keeps_an_existing_diary() {
    let path = setup_test_ledger("load_keeps");
    let original = populated_ledger(&path);
    store::save(&original).expect("save diary");

    // A later "today" must not touch the stored start date.
    let loaded = store::load_or_create(&path, d("2026-01-01")).expect("load diary");
    assert_eq!(loaded.start_date(), d("2025-09-01"));
    assert_eq!(loaded.days().count(), 2);
}

#[test]
fn save_as_repoints_the_diary() {
    let first = setup_test_ledger("save_as_first");
    let second = setup_test_ledger("save_as_second");

    let mut ledger = populated_ledger(&first);
    store::save(&ledger).expect("save diary");
    store::save_as(&mut ledger, &second).expect("save diary under new name");

    assert_eq!(ledger.file_name(), second);
    assert!(std::path::Path::new(&first).exists());
    assert!(std::path::Path::new(&second).exists());

    let loaded = store::load(&second).expect("load renamed diary");
    assert_eq!(loaded.days().count(), 2);
}

#[test]
fn missing_file_is_an_error_for_plain_load() {
    let path = setup_test_ledger("load_missing");
    assert!(store::load(&path).is_err());
}
