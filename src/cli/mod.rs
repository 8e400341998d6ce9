use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::errors::ValidationError;
use crate::mood::DateKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record one mood per day and review your history
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Record a mood (1 = great .. 5 = terrible); selecting the same mood again clears it
    Select {
        /// Mood score from 1 to 5
        score: i64,

        /// Day to record (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[clap(short = 'd', long)]
        date: Option<String>,
    },

    /// Set notes or tags on an existing mood; empty text clears them
    Note {
        /// Note text (required unless --tags is given)
        #[clap(required_unless_present = "tags")]
        text: Option<String>,

        /// Comma-separated tags for the day, e.g. "work,sleep"
        #[clap(short = 't', long)]
        tags: Option<String>,

        /// Day to annotate (defaults to today)
        #[clap(short = 'd', long)]
        date: Option<String>,
    },

    /// Delete the mood for a day
    Delete {
        /// Day to delete (defaults to today)
        #[clap(short = 'd', long)]
        date: Option<String>,
    },

    /// Show the month containing a day
    Show {
        /// Any day in the month to show (defaults to today)
        #[clap(short = 'd', long)]
        date: Option<String>,
    },

    /// Export all moods as CSV
    Export {
        /// Directory to write the export file to (defaults to the configured export dir)
        #[clap(short = 'o', long, conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Write CSV to standard output instead of a file
        #[clap(long)]
        stdout: bool,
    },

    /// Import moods from a CSV file; days that already have a mood are skipped
    Import {
        /// CSV file to import
        file: PathBuf,
    },

    /// Show the current streak and this week's moods
    Summary {
        /// Print the summary as JSON
        #[clap(long)]
        json: bool,
    },
}

impl Command {
    /// Whether the command mutates the store and must hold the write lock.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::Select { .. } | Command::Note { .. } | Command::Delete { .. } | Command::Import { .. }
        )
    }
}

/// Resolves an optional `--date` argument, defaulting to `today`.
pub fn resolve_day(date: Option<&str>, today: DateKey) -> Result<DateKey, ValidationError> {
    match date {
        Some(date_str) => DateKey::parse_cli(date_str),
        None => Ok(today),
    }
}
