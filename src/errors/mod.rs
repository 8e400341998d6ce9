//! Error handling utilities for the micromood application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Malformed CSV lines are deliberately absent from this taxonomy: the decoder
//! drops them and counts them, it never raises.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents failures to acquire the single-writer lock.
///
/// # Examples
///
/// ```
/// use micromood::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::Busy {
///     path: PathBuf::from("/data/micromood.lock"),
/// };
/// assert!(format!("{}", error).contains("another micromood process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process holds the write lock.
    #[error("The mood store is being modified by another micromood process ({path}). Please wait for it to finish and try again.")]
    Busy {
        /// Path to the lock file
        path: PathBuf,
    },

    /// The lock file could not be created or locked.
    #[error("Failed to acquire write lock {path}: {source}. Please check permissions on the data directory.")]
    AcquisitionFailed {
        /// Path to the lock file
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },
}

/// Errors raised by the backing mood store.
///
/// These are propagated to the caller unchanged; nothing in the core retries them.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite operation failed
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error
    #[error("Failed to get connection from pool: {0}\n\nThis may indicate database connection issues. Try closing other micromood instances.")]
    Pool(#[from] r2d2::Error),

    /// An in-memory store lock was poisoned by a panicking writer
    #[error("Mood store lock poisoned")]
    Poisoned,

    /// A storage failure with no underlying SQLite or pool error, such as a
    /// schema version this build cannot read
    #[error("Database error: {0}")]
    Custom(String),
}

/// Rejected input that never reaches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Mood score outside 1..=5
    #[error("Mood score must be between 1 and 5, got {0}")]
    ScoreOutOfRange(i64),

    /// A date argument could not be understood
    #[error("Invalid date '{0}': expected YYYY-MM-DD or YYYYMMDD")]
    InvalidDate(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid scores or dates supplied by the caller
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The backing store failed
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),

    /// The import pipeline failed as a whole.
    ///
    /// Distinct from a successful import that added zero rows.
    #[error("Import failed: {0}")]
    Import(String),

    /// Single-writer lock errors
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        let validation = AppError::from(ValidationError::ScoreOutOfRange(7));
        assert_eq!(
            format!("{}", validation),
            "Validation error: Mood score must be between 1 and 5, got 7"
        );

        let import = AppError::Import("store unreachable".to_string());
        assert_eq!(format!("{}", import), "Import failed: store unreachable");

        let lock_error = LockError::Busy {
            path: PathBuf::from("/data/micromood.lock"),
        };
        let app_error = AppError::Lock(lock_error);
        assert!(format!("{}", app_error).contains("File locking error"));
        assert!(format!("{}", app_error).contains("/data/micromood.lock"));
    }

    #[test]
    fn test_storage_error_from_database_error() {
        let app_error: AppError = DatabaseError::Poisoned.into();
        assert!(matches!(app_error, AppError::Storage(DatabaseError::Poisoned)));
        assert!(format!("{}", app_error).contains("poisoned"));
    }

    #[test]
    fn test_lock_acquisition_error_has_source() {
        use std::error::Error as _;

        let error = LockError::AcquisitionFailed {
            path: PathBuf::from("/data/micromood.lock"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.source().is_some());
        assert!(format!("{}", error).contains("denied"));
    }
}
