//! Weekly summary over the stored records.

use crate::errors::AppResult;
use crate::store::MoodStore;
use crate::summary::WeeklySummary;
use chrono::NaiveDateTime;
use tracing::debug;

/// Computes streak and weekly frequency relative to `now`.
pub fn weekly_summary<S>(store: &S, now: NaiveDateTime) -> AppResult<WeeklySummary>
where
    S: MoodStore + ?Sized,
{
    let records = store.get_all()?;
    let summary = WeeklySummary::compute(&records, now);
    debug!(
        "Summary at {}: streak {}, {} moods this week",
        now,
        summary.streak,
        summary.recorded_this_week()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::mood::{DateKey, MoodRecord, MoodScore};
    use crate::ops::select_mood;
    use crate::store::MoodStore;

    #[test]
    fn test_weekly_summary_from_database() {
        let db = Database::open_in_memory().unwrap();
        for (d, score) in [(13, 2), (14, 2), (15, 1)] {
            select_mood(&db, DateKey::from_ymd(2025, 1, d).unwrap(), score).unwrap();
        }
        db.upsert(&MoodRecord::new(
            DateKey::from_ymd(2025, 1, 5).unwrap(),
            MoodScore::new(5).unwrap(),
            None,
        ))
        .unwrap();

        let now = DateKey::from_ymd(2025, 1, 15)
            .unwrap()
            .date()
            .and_hms_opt(21, 0, 0)
            .unwrap();
        let summary = weekly_summary(&db, now).unwrap();

        assert_eq!(summary.streak, 3);
        assert_eq!(summary.count_for(MoodScore::new(2).unwrap()), 2);
        assert_eq!(summary.count_for(MoodScore::new(1).unwrap()), 1);
        assert_eq!(summary.count_for(MoodScore::new(5).unwrap()), 0);
    }
}
