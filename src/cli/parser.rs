use crate::export::ExportFormat;
use crate::models::activity::ActivityKind;
use crate::models::stamp::StampKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rworkdiary
/// CLI clocking diary: track working hours and leave against a daily target
#[derive(Parser)]
#[command(
    name = "rworkdiary",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple clocking diary CLI: stamp in and out, record leave, and track your balance",
    long_about = None
)]
pub struct Cli {
    /// Override diary file path (useful for tests or a second diary)
    #[arg(global = true, long = "ledger")]
    pub ledger: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty diary
    Init,

    /// Manage the configuration file and diary settings
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(
            long = "start-date",
            value_name = "DATE",
            help = "Set the diary start date (YYYY-MM-DD) used by balance and missing-day queries"
        )]
        start_date: Option<String>,

        #[arg(
            long = "target",
            value_name = "DURATION",
            help = "Set the daily target, e.g. 7h, 7h30m or 7:24"
        )]
        target: Option<String>,

        #[arg(
            long = "non-working",
            value_name = "DAYS",
            help = "Set the regular non-working weekdays, comma separated (e.g. sat,sun)"
        )]
        non_working: Option<String>,
    },

    /// Record a clocking, now or at a given date and time
    Stamp {
        /// Direction of the stamp; inferred from the previous stamp if omitted
        #[arg(value_enum)]
        kind: Option<StampKind>,

        /// Date to stamp on (YYYY-MM-DD); defaults to today
        #[arg(long = "date", requires = "at")]
        date: Option<String>,

        /// Time of day to stamp at (HH:MM); defaults to now
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Credit an activity (leave, training, ...) to a day
    Activity {
        /// Activity category
        #[arg(value_enum)]
        kind: ActivityKind,

        /// Amount of time, e.g. 7h, 3h30m or 3:30
        duration: String,

        /// Date to credit (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Remove a stamp or an activity from a day
    Del {
        /// Date to amend (YYYY-MM-DD)
        date: String,

        /// Remove the stamp at this time of day (HH:MM)
        #[arg(long = "at")]
        at: Option<String>,

        /// Remove this activity kind
        #[arg(long = "activity", value_enum)]
        activity: Option<ActivityKind>,

        /// With --activity: subtract only this much instead of the whole kind
        #[arg(long = "duration", requires = "activity")]
        duration: Option<String>,
    },

    /// Show a day's clockings and activities, or a Monday-Friday week view
    List {
        /// Date to show (YYYY-MM-DD); defaults to today
        date: Option<String>,

        /// Show the week containing the date instead
        #[arg(long = "week")]
        week: bool,
    },

    /// Balance of worked time against the daily target over a range
    Balance {
        /// Range start (YYYY-MM-DD); defaults to the diary start date
        #[arg(long = "from")]
        from: Option<String>,

        /// Range end (YYYY-MM-DD); defaults to today
        #[arg(long = "to")]
        to: Option<String>,
    },

    /// Working days with no record at all
    Missing {
        /// Range start (YYYY-MM-DD); defaults to the diary start date
        #[arg(long = "from")]
        from: Option<String>,

        /// Range end (YYYY-MM-DD); defaults to today
        #[arg(long = "to")]
        to: Option<String>,
    },

    /// Export recorded days over a range
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Range start (YYYY-MM-DD); defaults to the diary start date
        #[arg(long = "from")]
        from: Option<String>,

        /// Range end (YYYY-MM-DD); defaults to today
        #[arg(long = "to")]
        to: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Persist the diary under a new file name
    SaveAs {
        #[arg(value_name = "FILE")]
        file: String,
    },
}
