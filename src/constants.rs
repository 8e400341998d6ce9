//! Constants used throughout the application.
//!
//! This module contains all constants used in the micromood application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "micromood";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Record one mood per day and review your history";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for the micromood data directory.
pub const ENV_VAR_MICROMOOD_DIR: &str = "MICROMOOD_DIR";
/// Environment variable overriding the database file name.
pub const ENV_VAR_MICROMOOD_DB: &str = "MICROMOOD_DB";
/// Environment variable overriding where exports are written.
pub const ENV_VAR_MICROMOOD_EXPORT_DIR: &str = "MICROMOOD_EXPORT_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default data directory relative to the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/micromood";
/// Default database file name inside the data directory.
pub const DEFAULT_DB_FILE: &str = "micromood.db";
/// Exports sub-directory inside the data directory.
pub const DEFAULT_EXPORT_SUBDIR: &str = "exports";
/// Lock file guarding writers.
pub const LOCK_FILE_NAME: &str = "micromood.lock";

// Moods
/// Lowest valid mood score.
pub const MIN_MOOD_SCORE: u8 = 1;
/// Highest valid mood score.
pub const MAX_MOOD_SCORE: u8 = 5;
/// Labels indexed by `score - 1`. Lower scores are better moods.
pub const MOOD_LABELS: [&str; 5] = ["great", "good", "okay", "bad", "terrible"];

// CSV
/// Header row written on export.
pub const CSV_HEADER: &str = "Date,Mood,Notes";
/// Tokens that mark a first line as a header on import.
pub const CSV_HEADER_TOKENS: [&str; 2] = ["Date", "Mood"];
/// Date format used on export.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Verbose `Date::toString`-style timestamps, with the weekday and zone tokens
/// removed before parsing.
pub const VERBOSE_DATE_FORMAT: &str = "%b %d %H:%M:%S %Y";
/// Day-first slash format.
pub const DAY_FIRST_DATE_FORMAT: &str = "%d/%m/%Y";
/// ISO calendar date.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Month-first slash format.
pub const MONTH_FIRST_DATE_FORMAT: &str = "%m/%d/%Y";
/// Compact date accepted on the command line.
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";
/// Prefix for exported file names.
pub const EXPORT_FILE_PREFIX: &str = "MicroMood";
