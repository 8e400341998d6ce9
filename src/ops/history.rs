//! Month-at-a-time history views.

use crate::errors::AppResult;
use crate::mood::{DateKey, MoodRecord};
use crate::store::MoodStore;
use tracing::debug;

/// Records for the calendar month containing `day`, ascending.
pub fn month_view<S>(store: &S, day: DateKey) -> AppResult<Vec<MoodRecord>>
where
    S: MoodStore + ?Sized,
{
    let (start, end) = day.month_range();
    let records = store.get_range(start, end)?;
    debug!("{} moods recorded between {} and {}", records.len(), start, end);
    Ok(records)
}

/// Renders a month as one line per recorded day with a bar chart.
///
/// Bars use the inverted score, so a better mood draws a longer bar.
pub fn render_month(day: DateKey, records: &[MoodRecord]) -> String {
    let mut out = format!("{}\n", day.date().format("%B %Y"));

    if records.is_empty() {
        out.push_str("  No moods recorded\n");
        return out;
    }

    for record in records {
        out.push_str(&render_day(record));
        out.push('\n');
    }
    out
}

fn render_day(record: &MoodRecord) -> String {
    let mut line = format!(
        "  {} {:<5} {} ({})",
        record.day.date().format("%a %d"),
        "#".repeat(usize::from(record.score.inverted())),
        record.score,
        record.score.label()
    );
    if let Some(notes) = &record.notes {
        line.push_str(&format!("  {}", notes));
    }
    if let Some(tags) = &record.tags {
        line.push_str(&format!(" [{}]", tags));
    }
    line
}
