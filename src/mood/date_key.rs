//! Calendar-day identity for mood records.
//!
//! A `DateKey` discards time-of-day on construction, so two keys compare equal
//! iff they name the same year, month and day in the local calendar.

use crate::constants::{COMPACT_DATE_FORMAT, ISO_DATE_FORMAT};
use crate::errors::ValidationError;
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day-granularity key. Ordering is chronological.
///
/// # Examples
///
/// ```
/// use micromood::mood::DateKey;
/// use chrono::NaiveDate;
///
/// let morning = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(7, 30, 0).unwrap();
/// let night = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(23, 59, 59).unwrap();
/// assert_eq!(DateKey::from_datetime(morning), DateKey::from_datetime(night));
/// assert_eq!(DateKey::from_datetime(morning).to_string(), "2025-01-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Normalizes a wall-clock timestamp to its calendar day.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        DateKey(datetime.date())
    }

    /// Normalizes a zoned instant to the calendar day in that zone.
    pub fn from_zoned<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        DateKey(datetime.date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DateKey)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The previous calendar day, or `None` at the start of the representable range.
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(DateKey)
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(DateKey)
    }

    /// First and last day of the calendar month containing this key.
    pub fn month_range(&self) -> (DateKey, DateKey) {
        let first = self.0.with_day(1).unwrap_or(self.0);
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.0);
        (DateKey(first), DateKey(last))
    }

    /// Monday and Sunday of the calendar week containing this key.
    pub fn week_range(&self) -> (DateKey, DateKey) {
        let offset = u64::from(self.0.weekday().num_days_from_monday());
        let monday = self.0.checked_sub_days(Days::new(offset)).unwrap_or(self.0);
        let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
        (DateKey(monday), DateKey(sunday))
    }

    /// Parses a command-line date in `YYYY-MM-DD` or `YYYYMMDD` form.
    pub fn parse_cli(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(trimmed, COMPACT_DATE_FORMAT))
            .map(DateKey)
            .map_err(|_| ValidationError::InvalidDate(input.to_string()))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl From<NaiveDateTime> for DateKey {
    fn from(datetime: NaiveDateTime) -> Self {
        DateKey::from_datetime(datetime)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse_cli(s)
    }
}
