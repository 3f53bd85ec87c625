use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for motokm
/// CLI mileage logger for motorcycle couriers, backed by SQLite
#[derive(Parser)]
#[command(
    name = "motokm",
    version = env!("CARGO_PKG_VERSION"),
    about = "A mileage logging CLI for motorcycle couriers: open/close shifts by odometer and report the km ridden",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Period selection shared by `history` and `export`.
/// Without flags the configured default period (current month or day) is used.
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    #[arg(
        long = "month",
        value_name = "YYYY-MM",
        conflicts_with_all = ["day", "all"],
        help = "Only shifts of this month"
    )]
    pub month: Option<String>,

    #[arg(
        long = "day",
        value_name = "YYYY-MM-DD",
        conflicts_with = "all",
        help = "Only shifts of this day"
    )]
    pub day: Option<String>,

    #[arg(long = "all", help = "Every shift ever recorded")]
    pub all: bool,
}

/// Data collected for one odometer capture (`start` / `end`).
#[derive(Args, Debug, Clone, Default)]
pub struct CaptureArgs {
    #[arg(long = "km", value_name = "KM", help = "Odometer reading (whole km)")]
    pub km: Option<String>,

    #[arg(
        long = "photo",
        value_name = "FILE",
        help = "Dashboard photo; read by the configured OCR command when --km is missing"
    )]
    pub photo: Option<String>,

    #[arg(long = "location", value_name = "TEXT", help = "Free-text address")]
    pub location: Option<String>,

    #[arg(long = "street", help = "Street name (alternative to --location)")]
    pub street: Option<String>,

    #[arg(long = "number", help = "House number")]
    pub number: Option<String>,

    #[arg(long = "suburb", help = "Suburb / neighbourhood")]
    pub suburb: Option<String>,

    #[arg(long = "city", help = "City")]
    pub city: Option<String>,

    #[arg(long = "lat", requires = "lon", allow_hyphen_values = true, help = "Latitude")]
    pub lat: Option<f64>,

    #[arg(long = "lon", requires = "lat", allow_hyphen_values = true, help = "Longitude")]
    pub lon: Option<f64>,

    #[arg(
        long = "at",
        value_name = "YYYY-MM-DD HH:MM",
        help = "Record the capture at this local time instead of now"
    )]
    pub at: Option<String>,

    #[arg(
        long = "force",
        short = 'f',
        help = "Skip the open-shift checks (double start, end without start)"
    )]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register (or replace) the rider profile
    Register {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long = "model", default_value = "", help = "Motorcycle model")]
        model: String,

        #[arg(long)]
        plate: String,
    },

    /// Show the registered profile
    Profile,

    /// Open a shift (START entry)
    Start(CaptureArgs),

    /// Close the open shift (END entry)
    End(CaptureArgs),

    /// Show whether a shift is open and the last odometer reading
    Status,

    /// List shifts with their distances and totals
    History {
        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long = "details", help = "Show photos and locations of each entry")]
        details: bool,
    },

    /// Correct the odometer values of a shift
    Edit {
        /// Shift id as printed by `history` (e.g. pair_1717398000000_1717430400000)
        pair: String,

        #[arg(long = "start-km", value_name = "KM")]
        start_km: Option<String>,

        #[arg(long = "end-km", value_name = "KM")]
        end_km: Option<String>,
    },

    /// Export shifts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete the profile and every entry (the internal log is kept)
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
