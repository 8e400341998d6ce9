//! The day-keyed mood store seam.
//!
//! Everything above this module talks to a `MoodStore`; the SQLite `Database`
//! is the durable implementation and `MemoryStore` backs tests and dry runs.
//! Implementations guarantee atomic per-day upsert and remove. Writers are
//! serialized outside the store (see `ops::lock`).

use crate::errors::{AppResult, DatabaseError};
use crate::mood::{normalize_notes, DateKey, MoodRecord};
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

/// CRUD over day-keyed mood records.
pub trait MoodStore {
    /// Inserts or replaces the record for `record.day`.
    fn upsert(&self, record: &MoodRecord) -> AppResult<()>;

    /// Returns the record for `day`, if any.
    fn get(&self, day: DateKey) -> AppResult<Option<MoodRecord>>;

    /// Returns every stored record. Callers must not rely on the order.
    fn get_all(&self) -> AppResult<Vec<MoodRecord>>;

    /// Records with `start <= day <= end`, ascending by day.
    fn get_range(&self, start: DateKey, end: DateKey) -> AppResult<Vec<MoodRecord>>;

    /// Deletes the record for `day`. Returns whether one existed.
    fn remove(&self, day: DateKey) -> AppResult<bool>;

    /// Replaces the notes of an existing record. Returns `false` (and changes
    /// nothing) when `day` has no record.
    fn update_notes(&self, day: DateKey, notes: Option<String>) -> AppResult<bool>;

    fn count(&self) -> AppResult<usize> {
        Ok(self.get_all()?.len())
    }
}

/// A volatile store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<DateKey, MoodRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `records`; later days overwrite earlier ones.
    pub fn with_records<I: IntoIterator<Item = MoodRecord>>(records: I) -> Self {
        let map = records.into_iter().map(|r| (r.day, r.normalized())).collect();
        MemoryStore {
            records: RwLock::new(map),
        }
    }
}

impl MoodStore for MemoryStore {
    fn upsert(&self, record: &MoodRecord) -> AppResult<()> {
        debug!("Upserting mood {} for {}", record.score, record.day);
        let mut records = self.records.write().map_err(|_| DatabaseError::Poisoned)?;
        records.insert(record.day, record.normalized());
        Ok(())
    }

    fn get(&self, day: DateKey) -> AppResult<Option<MoodRecord>> {
        let records = self.records.read().map_err(|_| DatabaseError::Poisoned)?;
        Ok(records.get(&day).cloned())
    }

    fn get_all(&self) -> AppResult<Vec<MoodRecord>> {
        let records = self.records.read().map_err(|_| DatabaseError::Poisoned)?;
        Ok(records.values().cloned().collect())
    }

    fn get_range(&self, start: DateKey, end: DateKey) -> AppResult<Vec<MoodRecord>> {
        if start > end {
            return Ok(Vec::new());
        }
        let records = self.records.read().map_err(|_| DatabaseError::Poisoned)?;
        Ok(records.range(start..=end).map(|(_, r)| r.clone()).collect())
    }

    fn remove(&self, day: DateKey) -> AppResult<bool> {
        let mut records = self.records.write().map_err(|_| DatabaseError::Poisoned)?;
        Ok(records.remove(&day).is_some())
    }

    fn update_notes(&self, day: DateKey, notes: Option<String>) -> AppResult<bool> {
        let mut records = self.records.write().map_err(|_| DatabaseError::Poisoned)?;
        match records.get_mut(&day) {
            Some(record) => {
                record.notes = normalize_notes(notes);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> AppResult<usize> {
        let records = self.records.read().map_err(|_| DatabaseError::Poisoned)?;
        Ok(records.len())
    }
}
