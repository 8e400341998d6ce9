//! Configuration management for the micromood application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MICROMOOD_DIR`: Data directory (defaults to ~/.local/share/micromood)
//! - `MICROMOOD_DB`: Database file; relative names live inside the data directory
//!   (defaults to `micromood.db`)
//! - `MICROMOOD_EXPORT_DIR`: Where export files are written (defaults to `<data dir>/exports`)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_DB_FILE, DEFAULT_EXPORT_SUBDIR, ENV_VAR_HOME,
    ENV_VAR_MICROMOOD_DB, ENV_VAR_MICROMOOD_DIR, ENV_VAR_MICROMOOD_EXPORT_DIR,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the micromood application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use micromood::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/var/lib/micromood"),
///     db_path: PathBuf::from("/var/lib/micromood/micromood.db"),
///     export_dir: PathBuf::from("/var/lib/micromood/exports"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory holding the database and the writer lock.
    pub data_dir: PathBuf,

    /// SQLite database file.
    pub db_path: PathBuf,

    /// Directory export files are written to.
    pub export_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("db_path", &"[REDACTED_PATH]")
            .field("export_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

fn expand(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Paths are expanded with `shellexpand`, so `~` and `$VAR` references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the data directory
    /// resolves to an empty path.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MICROMOOD_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });
        let data_dir = expand(&data_dir_str)?;

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let db_file = env::var(ENV_VAR_MICROMOOD_DB).unwrap_or_else(|_| DEFAULT_DB_FILE.to_string());
        let db_path = data_dir.join(expand(&db_file)?);

        let export_dir = match env::var(ENV_VAR_MICROMOOD_EXPORT_DIR) {
            Ok(dir) => expand(&dir)?,
            Err(_) => data_dir.join(DEFAULT_EXPORT_SUBDIR),
        };

        Ok(Config {
            data_dir,
            db_path,
            export_dir,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a path is empty or the data directory is relative.
    ///
    /// ```
    /// use micromood::Config;
    /// use std::path::PathBuf;
    ///
    /// let relative = Config {
    ///     data_dir: PathBuf::from("moods"),
    ///     db_path: PathBuf::from("moods/micromood.db"),
    ///     export_dir: PathBuf::from("moods/exports"),
    /// };
    /// assert!(relative.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.db_path.file_name().is_none() {
            return Err(AppError::Config(
                "Database path must name a file".to_string(),
            ));
        }

        if self.export_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Export directory path is empty".to_string()));
        }

        Ok(())
    }
}
