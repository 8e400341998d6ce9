//! The mood data model.
//!
//! A `MoodRecord` is keyed by its `DateKey`: two records for the same calendar
//! day are the same entity. Scores are validated on construction so an invalid
//! value can never reach a store.

pub mod date_key;

pub use date_key::DateKey;

use crate::constants::{MAX_MOOD_SCORE, MIN_MOOD_SCORE, MOOD_LABELS};
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mood score in `1..=5`, where 1 is the best mood and 5 the worst.
///
/// # Examples
///
/// ```
/// use micromood::mood::MoodScore;
///
/// let score = MoodScore::new(2).unwrap();
/// assert_eq!(score.value(), 2);
/// assert_eq!(score.label(), "good");
/// assert!(MoodScore::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MoodScore(u8);

impl MoodScore {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(MIN_MOOD_SCORE)..=i64::from(MAX_MOOD_SCORE)).contains(&value) {
            Ok(MoodScore(value as u8))
        } else {
            Err(ValidationError::ScoreOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        MOOD_LABELS[usize::from(self.0 - MIN_MOOD_SCORE)]
    }

    /// Chart height for this score: better moods plot higher.
    pub fn inverted(&self) -> u8 {
        MAX_MOOD_SCORE + MIN_MOOD_SCORE - self.0
    }

    /// Every valid score, best first.
    pub fn all() -> impl Iterator<Item = MoodScore> {
        (MIN_MOOD_SCORE..=MAX_MOOD_SCORE).map(MoodScore)
    }
}

impl TryFrom<i64> for MoodScore {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MoodScore::new(value)
    }
}

impl From<MoodScore> for u8 {
    fn from(score: MoodScore) -> Self {
        score.0
    }
}

impl fmt::Display for MoodScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One day's mood entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub day: DateKey,
    pub score: MoodScore,
    /// Free text; never `Some("")` or whitespace-only.
    pub notes: Option<String>,
    /// Free-form labels set with `note --tags`; same normalization as notes.
    pub tags: Option<String>,
}

impl MoodRecord {
    /// Creates a record, normalizing `notes` so blank text is stored as absent.
    pub fn new(day: DateKey, score: MoodScore, notes: Option<String>) -> Self {
        MoodRecord {
            day,
            score,
            notes: normalize_notes(notes),
            tags: None,
        }
    }

    pub fn with_tags(mut self, tags: Option<String>) -> Self {
        self.tags = normalize_notes(tags);
        self
    }

    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    /// Copy of this record with notes and tags normalized.
    ///
    /// Stores call this on write so records built with a struct literal obey
    /// the same invariants as those built with [`MoodRecord::new`].
    pub fn normalized(&self) -> MoodRecord {
        MoodRecord {
            day: self.day,
            score: self.score,
            notes: normalize_notes(self.notes.clone()),
            tags: normalize_notes(self.tags.clone()),
        }
    }
}

/// Flattens free text onto one line and maps empty results to `None`.
///
/// Each line is trimmed and non-empty lines are joined with a single space, so
/// stored text never contains `\r` or `\n`.
pub fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|text| {
            text.split(|c: char| c == '\r' || c == '\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> DateKey {
        DateKey::from_ymd(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_score_bounds() {
        assert!(MoodScore::new(1).is_ok());
        assert!(MoodScore::new(5).is_ok());
        assert_eq!(MoodScore::new(0), Err(ValidationError::ScoreOutOfRange(0)));
        assert_eq!(MoodScore::new(6), Err(ValidationError::ScoreOutOfRange(6)));
        assert_eq!(MoodScore::new(-3), Err(ValidationError::ScoreOutOfRange(-3)));
    }

    #[test]
    fn test_score_labels_and_inversion() {
        let labels: Vec<_> = MoodScore::all().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["great", "good", "okay", "bad", "terrible"]);

        let heights: Vec<_> = MoodScore::all().map(|s| s.inverted()).collect();
        assert_eq!(heights, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_blank_notes_are_absent() {
        let score = MoodScore::new(3).unwrap();
        assert_eq!(MoodRecord::new(day(), score, Some("   ".to_string())).notes, None);
        assert_eq!(MoodRecord::new(day(), score, Some(String::new())).notes, None);
        assert_eq!(
            MoodRecord::new(day(), score, Some("  okay day \n".to_string())).notes,
            Some("okay day".to_string())
        );
    }

    #[test]
    fn test_line_breaks_in_notes_are_flattened() {
        assert_eq!(
            normalize_notes(Some("first line\nsecond line".to_string())),
            Some("first line second line".to_string())
        );
        assert_eq!(
            normalize_notes(Some(" a \r\n\r\n  b\rc ".to_string())),
            Some("a b c".to_string())
        );
        assert_eq!(normalize_notes(Some("\n\r\n".to_string())), None);
    }

    #[test]
    fn test_normalized_fixes_struct_literals() {
        let raw = MoodRecord {
            day: day(),
            score: MoodScore::new(2).unwrap(),
            notes: Some("  ".to_string()),
            tags: Some(" work\nsleep ".to_string()),
        };

        let normalized = raw.normalized();
        assert_eq!(normalized.notes, None);
        assert_eq!(normalized.tags, Some("work sleep".to_string()));
        assert_eq!(normalized.score, raw.score);
    }

    #[test]
    fn test_record_serializes_with_plain_values() {
        let record = MoodRecord::new(day(), MoodScore::new(4).unwrap(), Some("rain".to_string()));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["day"], "2025-01-15");
        assert_eq!(json["score"], 4);
        assert_eq!(json["notes"], "rain");
        assert!(json["tags"].is_null());
    }
}
