use crate::export::ExportFormat;
use crate::models::stop_entry::{
    CarType, Gender, MAX_DRIVER_AGE, MAX_STOP_MINUTES, MIN_DRIVER_AGE, MIN_STOP_MINUTES,
    SearchType, Violation, YesNo,
};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for SecureCheck
#[derive(Parser)]
#[command(
    name = "securecheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "SecureCheck traffic records: seed a check-post database and explore traffic stops from the terminal",
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

/// Optional file output shared by the views that fetch rows.
#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    #[arg(long = "export", value_name = "FILE", help = "Also write the fetched rows to FILE")]
    pub file: Option<String>,

    #[arg(long, value_enum, default_value = "csv", requires = "file")]
    pub format: ExportFormat,

    #[arg(long, short = 'f', requires = "file", help = "Overwrite FILE without asking")]
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

    /// Manage the database (integrity checks, statistics, vacuum)
    Db {
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

    /// Create the check-post tables and load the sample stops and officers
    Seed,

    /// Welcome screen
    Home,

    /// Traffic stop records table with metrics and charts
    Records {
        #[command(flatten)]
        export: ExportArgs,
    },

    /// Run one of the predefined queries
    Query {
        /// Query number (see --list) or its exact label
        #[arg(required_unless_present = "list")]
        query: Option<String>,

        #[arg(long, short = 'l', help = "List the available queries")]
        list: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Rows written by the loader into check_post_logs
    Checkpost {
        #[arg(long, short = 'n', help = "Number of rows to show (default from config)")]
        limit: Option<u32>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Fill in a police stop record and print its narrative
    Entry {
        #[arg(long = "date", value_name = "YYYY-MM-DD", help = "Stop date (default: today)")]
        stop_date: Option<String>,

        #[arg(long = "time", value_name = "HH:MM", default_value = "14:30")]
        stop_time: String,

        #[arg(long = "country", default_value = "")]
        country_name: String,

        #[arg(long = "gender", value_enum, default_value_t = Gender::Male)]
        driver_gender: Gender,

        #[arg(
            long = "age",
            default_value_t = 27,
            value_parser = clap::value_parser!(u32).range(MIN_DRIVER_AGE as i64..=MAX_DRIVER_AGE as i64)
        )]
        driver_age: u32,

        #[arg(long = "vehicle", default_value = "")]
        vehicle_number: String,

        #[arg(long = "car-type", value_enum, default_value_t = CarType::Sedan)]
        car_type: CarType,

        #[arg(long = "search-conducted", value_enum, default_value_t = YesNo::No)]
        search_conducted: YesNo,

        #[arg(long = "search-type", value_enum, default_value_t = SearchType::Frisk)]
        search_type: SearchType,

        #[arg(
            long = "duration",
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(MIN_STOP_MINUTES as i64..=MAX_STOP_MINUTES as i64),
            help = "Stop duration in minutes"
        )]
        stop_duration_minutes: u32,

        #[arg(long = "arrest", value_enum, default_value_t = YesNo::No)]
        is_arrest: YesNo,

        #[arg(long = "drug-related", value_enum, default_value_t = YesNo::No)]
        drug_related_stop: YesNo,

        #[arg(long = "violation", value_enum, default_value_t = Violation::Speeding)]
        violation: Violation,

        #[arg(long = "width", help = "Wrap the narrative at this many columns (default from config)")]
        width: Option<usize>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },
}
