use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::day::DayRecord;
use crate::models::warning::Warning;
use crate::ui::messages::show_warnings;
use crate::utils::colors::colorize_empty;
use crate::utils::date;
use crate::utils::date::parse_optional_date;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::weekday_str;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: on, week } = cmd {
        let ledger = open_ledger(cfg)?;
        let anchor = parse_optional_date(on.as_ref())?.unwrap_or_else(date::today);

        if *week {
            let mut table = Table::new(vec![
                Column {
                    header: "Date".into(),
                    width: 12,
                },
                Column {
                    header: "Day".into(),
                    width: 5,
                },
                Column {
                    header: "Worked".into(),
                    width: 18,
                },
            ]);

            for row in ledger.week_view(anchor) {
                let worked = match row.worked_minutes {
                    Some(mins) => format!("{} total", mins2readable(mins, false, false)),
                    None => colorize_empty("nothing recorded"),
                };
                table.add_row(vec![
                    row.date.to_string(),
                    weekday_str(row.date).to_string(),
                    worked,
                ]);
            }

            print!("{}", table.render());
        } else {
            match ledger.day(anchor) {
                Some(record) => print_day(record, cfg),
                None => show_warnings(&[Warning::NoRecord { date: anchor }], cfg.warnings),
            }
        }
    }
    Ok(())
}

/// Day details: every stamp and activity, then the worked total.
fn print_day(record: &DayRecord, cfg: &Config) {
    println!("{}", record.date());

    for (time, kind) in record.stamps() {
        println!("  {}: {}", kind.label(), time.format("%H:%M"));
    }
    for (kind, minutes) in record.activities() {
        println!("  {}: {}", kind.label(), mins2readable(*minutes, false, false));
    }

    println!(
        "Hours worked: {}",
        mins2readable(record.worked_minutes(), false, false)
    );

    show_warnings(&record.audit(), cfg.warnings);
}
