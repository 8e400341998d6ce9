//! Database schema definitions and initialization.
//!
//! This module defines the SQLite schema for mood records. Databases written by
//! the first schema version stored only `(day, score)`; opening one upgrades it
//! in place by adding the `notes` and `tags` columns.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version.
///
/// Increment this whenever schema changes are made to support future migrations.
pub const SCHEMA_VERSION: i32 = 2;

/// Creates all database tables and indexes, upgrading legacy tables.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// # Tables
///
/// - `moods`: One row per calendar day
/// - `schema_version`: Applied schema versions
///
/// # Errors
///
/// Returns an error if any DDL statement fails, or `DatabaseError::Custom` if
/// the database was written by a newer schema version.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS moods (
            day TEXT PRIMARY KEY NOT NULL,
            score INTEGER NOT NULL CHECK(score BETWEEN 1 AND 5),
            notes TEXT DEFAULT NULL,
            tags TEXT DEFAULT NULL,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_moods_day ON moods(day);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL,
            applied_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    let current_version = get_schema_version(conn)?;
    if let Some(version) = current_version.filter(|v| *v > SCHEMA_VERSION) {
        return Err(DatabaseError::Custom(format!(
            "Database schema version {} is newer than supported version {}",
            version, SCHEMA_VERSION
        ))
        .into());
    }

    add_missing_columns(conn)?;

    match current_version {
        Some(version) if version == SCHEMA_VERSION => {
            debug!("Schema version already recorded: {}", version);
        }
        _ => {
            conn.execute(
                "INSERT INTO schema_version (version) VALUES (?)",
                [SCHEMA_VERSION],
            )
            .map_err(DatabaseError::Sqlite)?;
            info!(
                "Recorded database schema version {} (was {:?})",
                SCHEMA_VERSION, current_version
            );
        }
    }

    debug!("Database tables created successfully");
    Ok(())
}

/// Adds the columns introduced after the first schema version.
fn add_missing_columns(conn: &Connection) -> AppResult<()> {
    let columns = table_columns(conn, "moods")?;

    for (column, ddl) in [
        ("notes", "ALTER TABLE moods ADD COLUMN notes TEXT DEFAULT NULL"),
        ("tags", "ALTER TABLE moods ADD COLUMN tags TEXT DEFAULT NULL"),
    ] {
        if !columns.iter().any(|c| c == column) {
            info!("Migrating moods table: adding '{}' column", column);
            conn.execute_batch(ddl).map_err(DatabaseError::Sqlite)?;
        }
    }

    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .map_err(DatabaseError::Sqlite)?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;
    Ok(columns)
}

/// Gets the current schema version from the database.
///
/// Returns `None` if the schema_version table doesn't exist or is empty.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than missing table.
pub fn get_schema_version(conn: &Connection) -> AppResult<Option<i32>> {
    let result = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, Option<i32>>(0)
    });

    match result {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) if e.to_string().contains("no such table") => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}
