use crate::export::ExportFormat;
use crate::models::bucket::Bucket;
use clap::{Parser, Subcommand};

/// Command-line interface definition for triplog
/// CLI application to keep track of personal trips with SQLite
#[derive(Parser)]
#[command(
    name = "triplog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple trip tracker: record trips and see which are current, upcoming or past",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the configuration in effect")]
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new trip
    Add {
        /// Trip name
        name: String,

        #[arg(
            long,
            short,
            help = "Trip category (see `config --print` for the allowed values)"
        )]
        category: Option<String>,

        #[arg(long, short, help = "Start date (YYYY-MM-DD, default: today)")]
        start: Option<String>,

        #[arg(long, short, help = "End date (YYYY-MM-DD, default: today)")]
        end: Option<String>,
    },

    /// Change name, category or dates of an existing trip
    Edit {
        /// Trip ID
        id: i64,

        #[arg(long, short, help = "New name")]
        name: Option<String>,

        #[arg(long, short, help = "New category")]
        category: Option<String>,

        #[arg(long, short, help = "New start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long, short, help = "New end date (YYYY-MM-DD)")]
        end: Option<String>,
    },

    /// Delete a trip by ID
    Del {
        /// Trip ID
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the details of one trip
    Show {
        /// Trip ID
        id: i64,
    },

    /// List trips grouped as current, upcoming and past
    List {
        #[arg(long, value_enum, help = "Show only one group")]
        bucket: Option<Bucket>,

        #[arg(long, help = "Reference day instead of today (YYYY-MM-DD)")]
        today: Option<String>,

        #[arg(
            long,
            conflicts_with = "bucket",
            help = "Show every trip in start-date order, ungrouped"
        )]
        all: bool,
    },

    /// Export trips to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Export only one group")]
        bucket: Option<Bucket>,

        #[arg(long, help = "Reference day instead of today (YYYY-MM-DD)")]
        today: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
