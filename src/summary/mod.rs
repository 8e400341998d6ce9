//! Streak and weekly mood-frequency aggregation.
//!
//! Everything here is a pure function of a record set and an explicit "now";
//! nothing reads the system clock.

use crate::mood::{DateKey, MoodRecord, MoodScore};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Number of consecutive recorded days ending with `today`.
///
/// Returns 0 when `today` itself has no record, whatever the earlier history.
///
/// # Examples
///
/// ```
/// use micromood::mood::{DateKey, MoodRecord, MoodScore};
/// use micromood::summary::current_streak;
///
/// let today = DateKey::from_ymd(2025, 1, 15).unwrap();
/// let records: Vec<_> = [15, 14, 13, 11]
///     .iter()
///     .map(|d| MoodRecord::new(DateKey::from_ymd(2025, 1, *d).unwrap(), MoodScore::new(3).unwrap(), None))
///     .collect();
/// assert_eq!(current_streak(&records, today), 3);
/// ```
pub fn current_streak(records: &[MoodRecord], today: DateKey) -> usize {
    let days: HashSet<DateKey> = records.iter().map(|r| r.day).collect();

    let mut streak = 0;
    let mut cursor = Some(today);
    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.pred();
    }
    streak
}

/// Monday and Sunday of the calendar week containing `now`.
pub fn current_week(now: NaiveDateTime) -> (DateKey, DateKey) {
    DateKey::from_datetime(now).week_range()
}

/// Counts this week's records per score.
///
/// Scores with no records this week are absent from the map.
pub fn weekly_frequency(records: &[MoodRecord], now: NaiveDateTime) -> BTreeMap<MoodScore, usize> {
    let (monday, sunday) = current_week(now);

    let mut frequency = BTreeMap::new();
    for record in records.iter().filter(|r| r.day >= monday && r.day <= sunday) {
        *frequency.entry(record.score).or_insert(0) += 1;
    }
    frequency
}

/// Streak plus this week's mood counts, as shown on the summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub streak: usize,
    pub week_start: DateKey,
    pub week_end: DateKey,
    pub frequency: BTreeMap<MoodScore, usize>,
}

impl WeeklySummary {
    pub fn compute(records: &[MoodRecord], now: NaiveDateTime) -> Self {
        let (week_start, week_end) = current_week(now);
        WeeklySummary {
            streak: current_streak(records, DateKey::from_datetime(now)),
            week_start,
            week_end,
            frequency: weekly_frequency(records, now),
        }
    }

    pub fn count_for(&self, score: MoodScore) -> usize {
        self.frequency.get(&score).copied().unwrap_or(0)
    }

    pub fn recorded_this_week(&self) -> usize {
        self.frequency.values().sum()
    }
}

fn days(count: usize) -> &'static str {
    if count == 1 {
        "day"
    } else {
        "days"
    }
}

impl fmt::Display for WeeklySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current streak: {} {}", self.streak, days(self.streak))?;
        writeln!(f, "Week of {} to {}:", self.week_start, self.week_end)?;

        if self.frequency.is_empty() {
            return writeln!(f, "  No moods recorded this week");
        }
        for (score, count) in &self.frequency {
            writeln!(f, "  {} {} feeling {}", count, days(*count), score.label())?;
        }
        Ok(())
    }
}
