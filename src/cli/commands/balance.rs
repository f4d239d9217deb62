use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::show_warnings;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date;
use crate::utils::date::parse_optional_date;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { from, to } = cmd {
        let ledger = open_ledger(cfg)?;

        let from = parse_optional_date(from.as_ref())?.unwrap_or_else(|| ledger.start_date());
        let to = parse_optional_date(to.as_ref())?.unwrap_or_else(date::today);

        let (report, warnings) = ledger.day_range(from, to);

        if report.rows.is_empty() {
            println!("All recorded days between {} and {} are on target.", from, to);
        } else {
            let mut table = Table::new(vec![
                Column {
                    header: "Date".into(),
                    width: 12,
                },
                Column {
                    header: "Worked".into(),
                    width: 10,
                },
                Column {
                    header: "Target".into(),
                    width: 10,
                },
                Column {
                    header: "Balance".into(),
                    width: 10,
                },
            ]);

            for row in &report.rows {
                table.add_row(vec![
                    row.date.to_string(),
                    mins2readable(row.worked_minutes, false, true),
                    mins2readable(ledger.day_target_minutes(), false, true),
                    format!(
                        "{}{}{}",
                        color_for_balance(row.delta_minutes),
                        mins2readable(row.delta_minutes, true, true),
                        RESET
                    ),
                ]);
            }

            print!("{}", table.render());
        }

        println!(
            "Balance {} to {}: {}{}{}",
            from,
            to,
            color_for_balance(report.balance_minutes),
            mins2readable(report.balance_minutes, true, false),
            RESET
        );

        show_warnings(&warnings, cfg.warnings);
    }
    Ok(())
}
