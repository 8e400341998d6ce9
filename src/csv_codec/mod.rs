//! CSV export and best-effort CSV import of mood records.
//!
//! Export writes a `Date,Mood,Notes` header and one `date,score,"notes"` row per
//! record, in input order. Import is lenient: a line that does not yield a valid
//! record is dropped and counted, and decoding as a whole never fails.
//!
//! # Example
//!
//! ```
//! use micromood::csv_codec;
//! use micromood::mood::{DateKey, MoodRecord, MoodScore};
//!
//! let day = DateKey::from_ymd(2025, 1, 15).unwrap();
//! let records = vec![MoodRecord::new(day, MoodScore::new(3).unwrap(), Some("okay, mostly".to_string()))];
//!
//! let text = csv_codec::encode(&records);
//! assert_eq!(text, "Date,Mood,Notes\n2025-01-15,3,\"okay, mostly\"\n");
//! assert_eq!(csv_codec::decode(&text), records);
//! ```

use crate::constants::{
    CSV_HEADER, CSV_HEADER_TOKENS, DAY_FIRST_DATE_FORMAT, EXPORT_DATE_FORMAT, ISO_DATE_FORMAT,
    MONTH_FIRST_DATE_FORMAT, VERBOSE_DATE_FORMAT,
};
use crate::mood::{normalize_notes, DateKey, MoodRecord, MoodScore};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Records recovered from a CSV document plus the number of lines dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    pub records: Vec<MoodRecord>,
    pub skipped_lines: usize,
}

/// Why a data line produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSkip {
    TooFewFields(usize),
    NotAnInteger(String),
    ScoreOutOfRange(i64),
    UnknownDateFormat(String),
}

impl fmt::Display for LineSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSkip::TooFewFields(n) => write!(f, "expected at least 2 fields, found {}", n),
            LineSkip::NotAnInteger(s) => write!(f, "mood '{}' is not an integer", s),
            LineSkip::ScoreOutOfRange(v) => write!(f, "mood {} is outside 1..=5", v),
            LineSkip::UnknownDateFormat(s) => write!(f, "unrecognized date '{}'", s),
        }
    }
}

/// Serializes records to CSV text.
pub fn encode(records: &[MoodRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 24);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&encode_row(record));
        out.push('\n');
    }

    out
}

/// Notes are flattened first, so every record occupies exactly one line.
fn encode_row(record: &MoodRecord) -> String {
    let notes = normalize_notes(record.notes.clone());
    format!(
        "{},{},\"{}\"",
        record.day.date().format(EXPORT_DATE_FORMAT),
        record.score,
        notes.as_deref().unwrap_or("")
    )
}

/// Parses CSV text into records, dropping lines that do not parse.
///
/// Rows are returned in file order and are not deduplicated: two rows for the
/// same day yield two records.
pub fn decode(text: &str) -> Vec<MoodRecord> {
    decode_with_stats(text).records
}

/// Like [`decode`], also reporting how many non-blank lines were dropped.
pub fn decode_with_stats(text: &str) -> DecodeOutcome {
    let mut lines = text.trim().split('\n').peekable();
    let mut outcome = DecodeOutcome::default();

    if let Some(first) = lines.peek() {
        if CSV_HEADER_TOKENS.iter().any(|token| first.contains(token)) {
            debug!("Dropping CSV header line");
            lines.next();
        }
    }

    for (index, line) in lines.enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                debug!("Skipping CSV data line {}: {}", index + 1, reason);
                outcome.skipped_lines += 1;
            }
        }
    }

    debug!(
        "Decoded {} records, skipped {} lines",
        outcome.records.len(),
        outcome.skipped_lines
    );
    outcome
}

/// Parses a single data line into a record.
pub fn parse_line(line: &str) -> Result<MoodRecord, LineSkip> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(LineSkip::TooFewFields(fields.len()));
    }

    let date_str = fields[0].trim();
    let score_str = fields[1].trim();

    let raw_score: i64 = score_str
        .parse()
        .map_err(|_| LineSkip::NotAnInteger(score_str.to_string()))?;
    let score = MoodScore::new(raw_score).map_err(|_| LineSkip::ScoreOutOfRange(raw_score))?;
    let day = parse_date(date_str).ok_or_else(|| LineSkip::UnknownDateFormat(date_str.to_string()))?;
    let notes = fields.get(2).map(|n| n.trim().to_string());

    Ok(MoodRecord::new(day, score, notes))
}

/// Splits a line on commas outside double quotes.
///
/// A double quote only toggles the quoted state and is never kept; there is no
/// escaped-quote handling.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

/// Parses a date in the first matching supported format.
///
/// Formats are tried in this order:
/// 1. verbose timestamps such as `Wed Jan 15 00:00:00 GMT 2025`
/// 2. `dd/mm/yyyy`
/// 3. `yyyy-mm-dd`
/// 4. `mm/dd/yyyy`
///
/// Matching is strict, so `12/31/2025` falls through to the month-first format
/// while `01/02/2025` is read as the 1st of February.
pub fn parse_date(input: &str) -> Option<DateKey> {
    let input = input.trim();

    parse_verbose_date(input)
        .or_else(|| NaiveDate::parse_from_str(input, DAY_FIRST_DATE_FORMAT).ok())
        .or_else(|| NaiveDate::parse_from_str(input, ISO_DATE_FORMAT).ok())
        .or_else(|| NaiveDate::parse_from_str(input, MONTH_FIRST_DATE_FORMAT).ok())
        .map(DateKey::from_date)
}

/// The weekday and zone tokens are dropped: the calendar day as written is the
/// key, even when the weekday does not match it.
fn parse_verbose_date(input: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let candidate = match tokens.len() {
        6 => format!("{} {} {} {}", tokens[1], tokens[2], tokens[3], tokens[5]),
        5 => tokens[1..].join(" "),
        _ => return None,
    };

    NaiveDateTime::parse_from_str(&candidate, VERBOSE_DATE_FORMAT)
        .ok()
        .map(|dt| dt.date())
}
