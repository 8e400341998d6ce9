use micromood::db::Database;
use micromood::mood::{DateKey, MoodRecord, MoodScore};
use micromood::ops::{self, SelectionOutcome};
use micromood::store::MoodStore;
use tempfile::tempdir;

fn day(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::from_ymd(y, m, d).unwrap()
}

fn open(path: &std::path::Path) -> Database {
    let db = Database::open(path).unwrap();
    db.initialize_schema().unwrap();
    db
}

#[test]
fn test_export_import_between_databases() {
    let dir = tempdir().unwrap();
    let source = open(&dir.path().join("source.db"));

    ops::select_mood(&source, day(2025, 1, 13), 2).unwrap();
    ops::select_mood(&source, day(2025, 1, 14), 4).unwrap();
    ops::update_notes(&source, day(2025, 1, 14), Some("deadline, late".to_string())).unwrap();

    let path = ops::export_to_dir(&source, &dir.path().join("exports"), day(2025, 1, 20)).unwrap();
    assert!(path.ends_with("MicroMood_2025-01-20_notes.csv"));

    let target = open(&dir.path().join("target.db"));
    target
        .upsert(&MoodRecord::new(day(2025, 1, 13), MoodScore::new(5).unwrap(), None))
        .unwrap();

    let report = ops::import_file(&target, &path).unwrap();
    assert_eq!((report.added, report.skipped), (1, 1));

    // The pre-existing day is untouched
    assert_eq!(target.get(day(2025, 1, 13)).unwrap().unwrap().score.value(), 5);
    let imported = target.get(day(2025, 1, 14)).unwrap().unwrap();
    assert_eq!(imported.score.value(), 4);
    assert_eq!(imported.notes.as_deref(), Some("deadline, late"));
}

#[test]
fn test_toggle_survives_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("moods.db");

    {
        let db = open(&db_path);
        assert_eq!(
            ops::select_mood(&db, day(2024, 2, 29), 3).unwrap(),
            SelectionOutcome::Created
        );
    }

    let db = open(&db_path);
    assert_eq!(
        ops::select_mood(&db, day(2024, 2, 29), 3).unwrap(),
        SelectionOutcome::Cleared
    );
    assert_eq!(db.count().unwrap(), 0);
}

#[test]
fn test_month_view_from_database() {
    let db = Database::open_in_memory().unwrap();
    for (m, d) in [(1, 31), (2, 1), (2, 14), (3, 1)] {
        ops::select_mood(&db, day(2025, m, d), 2).unwrap();
    }

    let days: Vec<DateKey> = ops::month_view(&db, day(2025, 2, 20))
        .unwrap()
        .into_iter()
        .map(|r| r.day)
        .collect();
    assert_eq!(days, vec![day(2025, 2, 1), day(2025, 2, 14)]);
}
