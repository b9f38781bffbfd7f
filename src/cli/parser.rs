use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for trainlog
#[derive(Parser)]
#[command(
    name = "trainlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal training log: record sessions, track training load, personal records and weekly reports",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second log)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or change user settings (dark mode, default RPE)
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        #[arg(long = "dark-mode", value_name = "BOOL", help = "Enable or disable dark mode")]
        dark_mode: Option<bool>,

        #[arg(
            long = "default-rpe",
            value_name = "1-10",
            value_parser = clap::value_parser!(u8).range(1..=10),
            help = "RPE used for the load of sessions logged without one"
        )]
        default_rpe: Option<u8>,
    },

    /// Log a training session
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Sport: Running, Gym, BJJ, Kickboxing, Cycling, Swimming, Other
        sport: String,

        /// Duration in minutes (>= 1)
        duration: String,

        #[arg(long, help = "Calories burned")]
        calories: Option<String>,

        #[arg(long, help = "Distance in km (5, 5.2 or 5,2)")]
        distance: Option<String>,

        #[arg(long, help = "Rate of perceived exertion, 1-10")]
        rpe: Option<String>,

        #[arg(long = "hr", help = "Average heart rate")]
        avg_hr: Option<String>,

        #[arg(long, help = "Free-text note")]
        note: Option<String>,
    },

    /// Edit a logged session (pass an empty value to clear an optional field)
    Edit {
        /// Session id (or a unique prefix of it, as shown by `list`)
        id: String,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New sport")]
        sport: Option<String>,

        #[arg(long, help = "New duration in minutes")]
        duration: Option<String>,

        #[arg(long)]
        calories: Option<String>,

        #[arg(long)]
        distance: Option<String>,

        #[arg(long)]
        rpe: Option<String>,

        #[arg(long = "hr")]
        avg_hr: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a logged session by id
    Del {
        /// Session id (or a unique prefix of it, as shown by `list`)
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List sessions
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY, YYYY-MM, YYYY-MM-DD
        /// - ranges in the same format: YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
        /// - all → the entire log
        ///
        /// If omitted, the current month is shown.
        #[arg(long, short)]
        period: Option<String>,

        /// Filter by sport
        #[arg(long)]
        sport: Option<String>,
    },

    /// Aggregated views: daily load, weekly summary, records, multi-week rollup
    Stats {
        #[command(subcommand)]
        view: StatsView,
    },

    /// Create a backup copy of the training log
    Backup {
        /// Destination file (absolute path). Default: timestamped copy in Backups/
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Compress the backup as .zip (requires --file)
        #[arg(long, requires = "file")]
        compress: bool,
    },

    /// Export sessions in various formats
    Export {
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period to export (same format as `list --period`). Default: everything
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Render the weekly report as a PDF document
    Report {
        /// Any day of the week to report (YYYY-MM-DD). Default: today
        #[arg(long)]
        week: Option<String>,

        /// Output file (absolute path). Default: Reports/week_<monday>.pdf
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print the activity log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum StatsView {
    /// Training load per day
    Daily {
        /// Period (same format as `list --period`). Default: current month
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Summary of one week (Monday to Sunday)
    Week {
        /// Any day of the week (YYYY-MM-DD). Default: today
        #[arg(long)]
        date: Option<String>,
    },

    /// Personal records
    Records,

    /// Minutes per week over the last weeks
    Rollup {
        /// Number of weeks, 1-520 (default from config)
        #[arg(
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=520)
        )]
        weeks: Option<usize>,

        /// Last week to include (any day of it, YYYY-MM-DD). Default: today
        #[arg(long)]
        date: Option<String>,
    },
}
