use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rdayone
/// Read-only CLI to browse and search Day One journal entries with SQLite
#[derive(Parser)]
#[command(
    name = "rdayone",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse, search and export Day One journal entries straight from the app's SQLite database (read-only)",
    long_about = None
)]
pub struct Cli {
    /// Override journal database path (useful for tests or a copied store)
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
    /// Create the configuration file pointing at the Day One database
    Init,

    /// Manage the configuration file (view or edit)
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
    },

    /// Inspect the journal database (read-only)
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// List the most recent entries
    Recent {
        /// Maximum entries to show (1-50)
        #[arg(long, short, default_value_t = 10)]
        limit: u32,

        /// Restrict to one journal by name
        #[arg(long, short)]
        journal: Option<String>,
    },

    /// Search entries by text content (case-insensitive)
    Search {
        /// Text to look for in entry content
        text: String,

        /// Maximum entries to show (1-50)
        #[arg(long, short, default_value_t = 20)]
        limit: u32,

        /// Restrict to one journal by name
        #[arg(long, short)]
        journal: Option<String>,
    },

    /// Show entries written on this day in previous years
    OnThisDay {
        /// Target date.
        ///
        /// Supported formats:
        /// - MM-DD        → month/day, scanned back from the current year
        /// - YYYY-MM-DD   → month/day, scanned back from the given year
        ///
        /// Examples:
        ///   rdayone on-this-day 06-14
        ///   rdayone on-this-day 2025-06-14 --years 10
        date: String,

        /// How many calendar years to scan (1-100)
        #[arg(long, short, default_value_t = 5)]
        years: u32,
    },

    /// Show one entry in full by its identifier
    Show {
        /// Entry identifier (UUID) as printed by the listing commands
        uuid: String,
    },

    /// List journals with entry counts
    Journals,

    /// Count entries
    Count {
        /// Restrict to one journal by name
        #[arg(long, short)]
        journal: Option<String>,
    },

    /// Export entries in various formats
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export only entries matching this text
        #[arg(long, short)]
        search: Option<String>,

        /// Restrict to one journal by name
        #[arg(long, short)]
        journal: Option<String>,

        /// Maximum entries to export (1-50)
        #[arg(long, short, default_value_t = 50)]
        limit: u32,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the journal database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
