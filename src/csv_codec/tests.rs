use super::*;
use std::collections::BTreeSet;

fn day(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::from_ymd(y, m, d).unwrap()
}

fn mood(day: DateKey, score: i64, notes: Option<&str>) -> MoodRecord {
    MoodRecord::new(day, MoodScore::new(score).unwrap(), notes.map(str::to_string))
}

fn triples(records: &[MoodRecord]) -> BTreeSet<(DateKey, u8, Option<String>)> {
    records
        .iter()
        .map(|r| (r.day, r.score.value(), r.notes.clone()))
        .collect()
}

#[test]
fn test_encode_header_and_rows() {
    let records = vec![
        mood(day(2025, 1, 15), 3, Some("okay day")),
        mood(day(2024, 12, 31), 1, None),
    ];

    let text = encode(&records);
    assert_eq!(
        text,
        "Date,Mood,Notes\n2025-01-15,3,\"okay day\"\n2024-12-31,1,\"\"\n"
    );
}

#[test]
fn test_encode_empty() {
    assert_eq!(encode(&[]), "Date,Mood,Notes\n");
    assert!(decode(&encode(&[])).is_empty());
}

#[test]
fn test_round_trip_preserves_triples() {
    let records = vec![
        mood(day(2025, 1, 15), 3, Some("okay, but tired")),
        mood(day(2025, 1, 14), 5, None),
        mood(day(2024, 2, 29), 1, Some("leap day!")),
        mood(day(2023, 7, 4), 2, Some("fireworks; late night")),
        mood(day(2022, 10, 1), 4, Some("  padded  ")),
    ];

    let decoded = decode(&encode(&records));
    assert_eq!(decoded.len(), records.len());
    assert_eq!(triples(&decoded), triples(&records));
}

#[test]
fn test_round_trip_with_multi_line_notes() {
    let records = vec![
        mood(day(2025, 1, 15), 3, Some("first line\nsecond line")),
        mood(day(2025, 1, 16), 2, Some("windows\r\nline end")),
    ];

    let text = encode(&records);
    assert_eq!(text.lines().count(), 3);

    let outcome = decode_with_stats(&text);
    assert_eq!(outcome.skipped_lines, 0);
    assert_eq!(triples(&outcome.records), triples(&records));
    assert_eq!(outcome.records[0].notes.as_deref(), Some("first line second line"));
}

#[test]
fn test_encode_flattens_struct_literal_notes() {
    let raw = MoodRecord {
        notes: Some("one\ntwo".to_string()),
        ..mood(day(2025, 1, 15), 4, None)
    };

    assert_eq!(encode(&[raw]), "Date,Mood,Notes\n2025-01-15,4,\"one two\"\n");
}

#[test]
fn test_decode_keeps_same_day_rows() {
    let text = "Date,Mood,Notes\n2025-01-15,3,\"okay day\"\n2025-01-15,4,\"\"";

    let records = decode(text);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], mood(day(2025, 1, 15), 3, Some("okay day")));
    assert_eq!(records[1], mood(day(2025, 1, 15), 4, None));
}

#[test]
fn test_header_detection() {
    // Either token is enough
    assert!(decode("Mood only header\n2025-01-15,3").len() == 1);
    assert!(decode("Date\n2025-01-15,3").len() == 1);

    // Without a header the first line is data
    let records = decode("2025-01-15,3\n2025-01-16,2");
    assert_eq!(records.len(), 2);

    // The check is case-sensitive
    let outcome = decode_with_stats("date,mood,notes\n2025-01-15,3");
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.skipped_lines, 1);
}

#[test]
fn test_non_integer_score_skips_only_that_line() {
    let outcome = decode_with_stats("Date,Mood,Notes\n2025-01-15,five,\"x\"\n2025-01-16,2,\"y\"");
    assert_eq!(outcome.records, vec![mood(day(2025, 1, 16), 2, Some("y"))]);
    assert_eq!(outcome.skipped_lines, 1);
}

#[test]
fn test_only_row_with_word_score_yields_nothing() {
    let outcome = decode_with_stats("Date,Mood,Notes\n2025-01-15,five,\"\"");
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.skipped_lines, 1);
}

#[test]
fn test_out_of_range_score_is_skipped() {
    let outcome = decode_with_stats("2025-01-15,0\n2025-01-16,6\n2025-01-17,5");
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].score.value(), 5);
    assert_eq!(outcome.skipped_lines, 2);
}

#[test]
fn test_too_few_fields_and_bad_dates_are_skipped() {
    let text = "Date,Mood,Notes\njust-one-field\nnot a date,3\n2025-13-40,2\n2025-01-15,1";
    let outcome = decode_with_stats(text);
    assert_eq!(outcome.records, vec![mood(day(2025, 1, 15), 1, None)]);
    assert_eq!(outcome.skipped_lines, 3);
}

#[test]
fn test_missing_notes_field_is_absent() {
    let records = decode("2025-01-15,3");
    assert_eq!(records[0].notes, None);
}

#[test]
fn test_blank_lines_and_crlf() {
    let text = "Date,Mood,Notes\r\n2025-01-15,3,\"a\"\r\n\r\n2025-01-16,4,\"b\"\r\n";
    let records = decode(text);
    assert_eq!(
        records,
        vec![
            mood(day(2025, 1, 15), 3, Some("a")),
            mood(day(2025, 1, 16), 4, Some("b")),
        ]
    );
}

#[test]
fn test_extra_fields_are_ignored() {
    let records = decode("2025-01-15,3,\"notes\",extra,more");
    assert_eq!(records, vec![mood(day(2025, 1, 15), 3, Some("notes"))]);
}

#[test]
fn test_split_fields_honors_quotes() {
    assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
    assert_eq!(split_fields("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
    assert_eq!(split_fields(""), vec![""]);
    assert_eq!(split_fields("a,"), vec!["a", ""]);
    // Quotes toggle state anywhere in a field and are dropped
    assert_eq!(split_fields("x\"y,z\"w,v"), vec!["xy,zw", "v"]);
}

#[test]
fn test_parse_date_verbose_form() {
    assert_eq!(parse_date("Wed Jan 15 00:00:00 GMT 2025"), Some(day(2025, 1, 15)));
    assert_eq!(parse_date("Sat Mar 02 13:45:10 PST 2024"), Some(day(2024, 3, 2)));
    assert_eq!(parse_date("Wed Jan 15 00:00:00 2025"), Some(day(2025, 1, 15)));
}

#[test]
fn test_parse_date_verbose_ignores_weekday() {
    // 2025-01-15 was a Wednesday
    assert_eq!(parse_date("Mon Jan 15 00:00:00 GMT 2025"), Some(day(2025, 1, 15)));
    assert_eq!(parse_date("Xyz Jan 15 00:00:00 2025"), Some(day(2025, 1, 15)));
    assert_eq!(parse_date("Wed Foo 15 00:00:00 GMT 2025"), None);
}

#[test]
fn test_parse_date_slash_forms_prefer_day_first() {
    assert_eq!(parse_date("01/02/2025"), Some(day(2025, 2, 1)));
    assert_eq!(parse_date("15/01/2025"), Some(day(2025, 1, 15)));
    // Not a valid day-first date, so month-first applies
    assert_eq!(parse_date("12/31/2025"), Some(day(2025, 12, 31)));
}

#[test]
fn test_parse_date_iso_and_failures() {
    assert_eq!(parse_date(" 2025-01-15 "), Some(day(2025, 1, 15)));
    assert_eq!(parse_date("2025/01/15"), None);
    assert_eq!(parse_date("yesterday"), None);
    assert_eq!(parse_date(""), None);
}

#[test]
fn test_verbose_dates_import_from_legacy_exports() {
    let text = "Date,Mood,Notes\nWed Jan 15 00:00:00 GMT 2025,2,\"from the phone\"\nThu Jan 16 00:00:00 GMT 2025,3,\"\"";
    let records = decode(text);
    assert_eq!(
        records,
        vec![
            mood(day(2025, 1, 15), 2, Some("from the phone")),
            mood(day(2025, 1, 16), 3, None),
        ]
    );
}

#[test]
fn test_parse_line_reports_reason() {
    assert_eq!(parse_line("2025-01-15"), Err(LineSkip::TooFewFields(1)));
    assert_eq!(
        parse_line("2025-01-15,great"),
        Err(LineSkip::NotAnInteger("great".to_string()))
    );
    assert_eq!(parse_line("2025-01-15,9"), Err(LineSkip::ScoreOutOfRange(9)));
    assert_eq!(
        parse_line("15.01.2025,2"),
        Err(LineSkip::UnknownDateFormat("15.01.2025".to_string()))
    );
}
