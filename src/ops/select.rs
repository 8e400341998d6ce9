//! Mood selection, note and tag editing, and deletion.
//!
//! `select_mood` is the single mutation path for a mood tap, whether it comes
//! from the main view or a quick-entry surface, so toggle semantics stay the
//! same everywhere.

use crate::errors::AppResult;
use crate::mood::{DateKey, MoodRecord, MoodScore};
use crate::store::MoodStore;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// What a selection did to the day's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionOutcome {
    /// No record existed; one was created.
    Created,
    /// A record with a different score was replaced; notes were kept.
    Updated,
    /// The same score was selected again and the record was removed.
    Cleared,
}

impl fmt::Display for SelectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SelectionOutcome::Created => "recorded",
            SelectionOutcome::Updated => "updated",
            SelectionOutcome::Cleared => "cleared",
        };
        f.write_str(text)
    }
}

/// Applies the toggle rule for a mood tap on `day`.
///
/// # Flow
///
/// 1. Validate the score (rejected before storage is touched)
/// 2. Read the existing record for the day
/// 3. Same score: remove the record (toggle-off)
/// 4. Otherwise: upsert the new score, carrying over existing notes
///
/// # Errors
///
/// Returns `AppError::Validation` for a score outside 1..=5 and
/// `AppError::Storage` if the store fails.
pub fn select_mood<S>(store: &S, day: DateKey, score: i64) -> AppResult<SelectionOutcome>
where
    S: MoodStore + ?Sized,
{
    let score = MoodScore::new(score)?;
    let existing = store.get(day)?;

    let outcome = match existing {
        Some(record) if record.score == score => {
            store.remove(day)?;
            SelectionOutcome::Cleared
        }
        Some(record) => {
            let updated = MoodRecord {
                score,
                ..record
            };
            store.upsert(&updated)?;
            SelectionOutcome::Updated
        }
        None => {
            store.upsert(&MoodRecord::new(day, score, None))?;
            SelectionOutcome::Created
        }
    };

    info!("Mood {} {} for {}", score, outcome, day);
    Ok(outcome)
}

/// Sets or clears the notes on an existing record.
///
/// Returns `false` when the day has no record; notes are never attached to a
/// missing entry.
pub fn update_notes<S>(store: &S, day: DateKey, notes: Option<String>) -> AppResult<bool>
where
    S: MoodStore + ?Sized,
{
    let updated = store.update_notes(day, notes)?;
    if updated {
        info!("Updated notes for {}", day);
    } else {
        debug!("No mood recorded for {}; notes not saved", day);
    }
    Ok(updated)
}

/// Sets or clears the tags on an existing record, keeping score and notes.
///
/// Returns `false` when the day has no record.
pub fn update_tags<S>(store: &S, day: DateKey, tags: Option<String>) -> AppResult<bool>
where
    S: MoodStore + ?Sized,
{
    match store.get(day)? {
        Some(record) => {
            store.upsert(&record.with_tags(tags))?;
            info!("Updated tags for {}", day);
            Ok(true)
        }
        None => {
            debug!("No mood recorded for {}; tags not saved", day);
            Ok(false)
        }
    }
}

/// Deletes the record for `day`. Returns whether one existed.
pub fn delete_mood<S>(store: &S, day: DateKey) -> AppResult<bool>
where
    S: MoodStore + ?Sized,
{
    let removed = store.remove(day)?;
    info!("Delete for {}: {}", day, if removed { "removed" } else { "nothing to remove" });
    Ok(removed)
}
