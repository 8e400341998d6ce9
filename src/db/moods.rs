//! Mood record CRUD operations.
//!
//! Days are stored as `YYYY-MM-DD` text, so lexical order is chronological and
//! range queries can use plain string comparison.

use crate::errors::{AppResult, DatabaseError};
use crate::mood::{normalize_notes, DateKey, MoodRecord, MoodScore};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT day, score, notes, tags FROM moods";

fn conversion_error(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<MoodRecord> {
    let day = NaiveDate::parse_from_str(&row.get::<_, String>(0)?, "%Y-%m-%d")
        .map_err(|e| conversion_error(0, e))?;
    let score = MoodScore::new(row.get::<_, i64>(1)?).map_err(|e| conversion_error(1, e))?;
    let notes: Option<String> = row.get(2)?;
    let tags: Option<String> = row.get(3)?;

    Ok(MoodRecord::new(DateKey::from_date(day), score, notes).with_tags(tags))
}

/// Inserts or replaces the mood for `record.day`.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn upsert_mood(conn: &Connection, record: &MoodRecord) -> AppResult<()> {
    debug!("Upserting mood {} for {}", record.score, record.day);
    let record = record.normalized();

    conn.execute(
        r#"
        INSERT INTO moods (day, score, notes, tags, updated_at)
        VALUES (?1, ?2, ?3, ?4, CURRENT_TIMESTAMP)
        ON CONFLICT(day) DO UPDATE SET
            score = excluded.score,
            notes = excluded.notes,
            tags = excluded.tags,
            updated_at = CURRENT_TIMESTAMP
        "#,
        params![
            record.day.to_string(),
            i64::from(record.score.value()),
            record.notes,
            record.tags
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

/// Retrieves the mood for a day.
///
/// Returns `Ok(None)` if no mood was recorded for the given day.
pub fn get_mood(conn: &Connection, day: DateKey) -> AppResult<Option<MoodRecord>> {
    debug!("Getting mood for {}", day);

    let result = conn.query_row(
        &format!("{} WHERE day = ?1", SELECT_COLUMNS),
        params![day.to_string()],
        row_to_record,
    );

    match result {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Retrieves every stored mood.
pub fn get_all_moods(conn: &Connection) -> AppResult<Vec<MoodRecord>> {
    let mut stmt = conn
        .prepare(SELECT_COLUMNS)
        .map_err(DatabaseError::Sqlite)?;
    let records = stmt
        .query_map([], row_to_record)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Loaded {} moods", records.len());
    Ok(records)
}

/// Retrieves moods with `start <= day <= end`, ordered by day ascending.
pub fn get_moods_between(
    conn: &Connection,
    start: DateKey,
    end: DateKey,
) -> AppResult<Vec<MoodRecord>> {
    debug!("Getting moods between {} and {}", start, end);

    let mut stmt = conn
        .prepare(&format!(
            "{} WHERE day >= ?1 AND day <= ?2 ORDER BY day ASC",
            SELECT_COLUMNS
        ))
        .map_err(DatabaseError::Sqlite)?;
    let records = stmt
        .query_map(params![start.to_string(), end.to_string()], row_to_record)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(records)
}

/// Deletes the mood for a day. Returns whether a row was removed.
pub fn delete_mood(conn: &Connection, day: DateKey) -> AppResult<bool> {
    debug!("Deleting mood for {}", day);

    let rows_affected = conn
        .execute("DELETE FROM moods WHERE day = ?1", params![day.to_string()])
        .map_err(DatabaseError::Sqlite)?;

    Ok(rows_affected > 0)
}

/// Sets notes on an existing mood. Returns `false` if the day has no mood.
pub fn update_mood_notes(conn: &Connection, day: DateKey, notes: Option<String>) -> AppResult<bool> {
    debug!("Updating notes for {}", day);

    let rows_affected = conn
        .execute(
            "UPDATE moods SET notes = ?2, updated_at = CURRENT_TIMESTAMP WHERE day = ?1",
            params![day.to_string(), normalize_notes(notes)],
        )
        .map_err(DatabaseError::Sqlite)?;

    Ok(rows_affected > 0)
}

pub fn count_moods(conn: &Connection) -> AppResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM moods", [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;
    Ok(count as usize)
}
