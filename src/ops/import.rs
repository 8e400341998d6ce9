//! CSV import: decode, then merge into the store without overwriting.
//!
//! Duplicates are decided by day against a snapshot of the store taken once
//! before merging. Rows that repeat a day within the same file are therefore
//! both applied, and the later one wins.

use crate::csv_codec;
use crate::errors::{AppError, AppResult};
use crate::mood::{DateKey, MoodRecord};
use crate::store::MoodStore;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Totals from merging parsed records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeCounts {
    pub added: usize,
    pub skipped: usize,
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Records recovered from the CSV text.
    pub parsed: usize,
    /// Non-blank lines dropped as malformed.
    pub malformed: usize,
    pub added: usize,
    /// Records whose day already had an entry.
    pub skipped: usize,
}

/// Inserts every parsed record whose day is absent from `existing`.
///
/// Existing entries are never overwritten.
pub fn merge<S>(store: &S, parsed: &[MoodRecord], existing: &[MoodRecord]) -> AppResult<MergeCounts>
where
    S: MoodStore + ?Sized,
{
    let existing_days: HashSet<DateKey> = existing.iter().map(|r| r.day).collect();
    let mut counts = MergeCounts::default();

    for record in parsed {
        if existing_days.contains(&record.day) {
            debug!("Skipping {}: already recorded", record.day);
            counts.skipped += 1;
        } else {
            store.upsert(record)?;
            counts.added += 1;
        }
    }

    Ok(counts)
}

/// Imports CSV text into the store.
///
/// # Errors
///
/// Returns `AppError::Import` if the store cannot be read or written. Upserts
/// applied before the failure remain in place. Malformed lines are not errors;
/// importing a file with no usable rows succeeds with zero counts.
pub fn import_csv<S>(store: &S, text: &str) -> AppResult<ImportReport>
where
    S: MoodStore + ?Sized,
{
    let decoded = csv_codec::decode_with_stats(text);
    info!(
        "Parsed {} records from CSV ({} malformed lines)",
        decoded.records.len(),
        decoded.skipped_lines
    );

    let result = store
        .get_all()
        .and_then(|existing| merge(store, &decoded.records, &existing));

    match result {
        Ok(counts) => {
            info!("Import finished: {} added, {} skipped", counts.added, counts.skipped);
            Ok(ImportReport {
                parsed: decoded.records.len(),
                malformed: decoded.skipped_lines,
                added: counts.added,
                skipped: counts.skipped,
            })
        }
        Err(e) => {
            warn!("Import aborted: {}", e);
            Err(AppError::Import(e.to_string()))
        }
    }
}

/// Reads a CSV file and imports it.
pub fn import_file<S>(store: &S, path: &Path) -> AppResult<ImportReport>
where
    S: MoodStore + ?Sized,
{
    debug!("Reading import file {:?}", path);
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::Import(format!("could not read {}: {}", path.display(), e)))?;
    import_csv(store, &text)
}
