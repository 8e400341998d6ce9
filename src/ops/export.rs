//! CSV export to a string or a dated file.

use crate::constants::{EXPORT_DATE_FORMAT, EXPORT_FILE_PREFIX};
use crate::csv_codec;
use crate::errors::{AppError, AppResult};
use crate::mood::{DateKey, MoodRecord};
use crate::store::MoodStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Serializes every stored record, oldest day first.
pub fn export_csv<S>(store: &S) -> AppResult<String>
where
    S: MoodStore + ?Sized,
{
    let records = sorted_records(store)?;
    debug!("Exporting {} records", records.len());
    Ok(csv_codec::encode(&records))
}

/// File name for an export taken on `today`.
///
/// The suffix tells at a glance whether the file carries any notes.
///
/// ```
/// use micromood::mood::DateKey;
/// use micromood::ops::export_file_name;
///
/// let today = DateKey::from_ymd(2025, 1, 15).unwrap();
/// assert_eq!(export_file_name(today, true), "MicroMood_2025-01-15_notes.csv");
/// assert_eq!(export_file_name(today, false), "MicroMood_2025-01-15_nonotes.csv");
/// ```
pub fn export_file_name(today: DateKey, has_notes: bool) -> String {
    format!(
        "{}_{}_{}.csv",
        EXPORT_FILE_PREFIX,
        today.date().format(EXPORT_DATE_FORMAT),
        if has_notes { "notes" } else { "nonotes" }
    )
}

/// Writes an export file into `dir` and returns its path.
///
/// The file is written to a temporary sibling first and renamed into place,
/// so a failed export never leaves a truncated CSV behind. An existing export
/// with the same name is replaced.
pub fn export_to_dir<S>(store: &S, dir: &Path, today: DateKey) -> AppResult<PathBuf>
where
    S: MoodStore + ?Sized,
{
    let records = sorted_records(store)?;
    let has_notes = records.iter().any(MoodRecord::has_notes);
    let path = dir.join(export_file_name(today, has_notes));

    fs::create_dir_all(dir)?;
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(csv_codec::encode(&records).as_bytes())?;
    temp.flush()?;
    temp.persist(&path).map_err(|e| AppError::Io(e.error))?;

    info!("Exported {} records to {:?}", records.len(), path);
    Ok(path)
}

fn sorted_records<S>(store: &S) -> AppResult<Vec<MoodRecord>>
where
    S: MoodStore + ?Sized,
{
    let mut records = store.get_all()?;
    records.sort_by_key(|r| r.day);
    Ok(records)
}
