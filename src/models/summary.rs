use chrono::NaiveDate;
use serde::Serialize;

/// One day's contribution to a range balance.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceRow {
    pub date: NaiveDate,
    pub worked_minutes: i64,
    /// Worked minus the daily target; positive is surplus.
    pub delta_minutes: i64,
}

/// Result of a range balance query. `rows` lists only the recorded days
/// whose worked total differs from the target; `balance_minutes` sums
/// worked minus target over every recorded day in the range. Days with no
/// record contribute nothing here (they are surfaced by unrecorded-day
/// detection instead).
#[derive(Debug, Default, Clone, Serialize)]
pub struct BalanceReport {
    pub rows: Vec<BalanceRow>,
    pub balance_minutes: i64,
}

/// One weekday line of the week view. `worked_minutes` is `None` when
/// nothing is recorded for the date.
#[derive(Debug, Clone, Serialize)]
pub struct WeekRow {
    pub date: NaiveDate,
    pub worked_minutes: Option<i64>,
}
