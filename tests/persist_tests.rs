mod common;
use chrono::{Duration, NaiveDate};
use common::{at, workspace};
use rtattendance::core::engine::sign_at;
use rtattendance::core::persist::{read_session, write_session};
use rtattendance::core::session::SessionTable;
use rtattendance::models::member::Member;
use rtattendance::utils::path::{
    dated_dir, dated_files, next_dated_stem, unique_name, unique_path,
};
use rtattendance::utils::time::{decode_timestamps, encode_timestamps};
use std::path::Path;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
}

fn signed_table() -> SessionTable {
    let mut table = SessionTable::new(&[
        Member::new(1, "Alice Smith", 9),
        Member::new(2, "Bob Jones", 12),
    ]);
    let required = Duration::minutes(90);
    let alice = table.validate("1").unwrap();
    sign_at(alice, &mut table, required, at(9, 0, 0));
    sign_at(alice, &mut table, required, at(10, 30, 0));
    let bob = table.validate("2").unwrap();
    sign_at(bob, &mut table, required, at(9, 15, 0));
    table
}

#[test]
fn test_unique_name_appends_counter() {
    let none: [&str; 0] = [];
    assert_eq!(unique_name("15", &none), "15");
    assert_eq!(unique_name("15", &["15"]), "15 (1)");
    assert_eq!(unique_name("15", &["15", "15 (1)", "15 (2)"]), "15 (3)");
    // gaps are reused
    assert_eq!(unique_name("15", &["15", "15 (2)"]), "15 (1)");
}

#[test]
fn test_unique_path_is_pure() {
    let base = Path::new("/data/files/tables/2025/September");
    assert_eq!(
        unique_path(base, "15", "csv", &["14", "15"]),
        base.join("15 (1).csv")
    );
}

#[test]
fn test_dated_stem_is_free_in_every_target() {
    let ws = workspace();
    let tables = ws.path().join("tables");
    let logs = ws.path().join("logs");
    std::fs::create_dir_all(dated_dir(&logs, date())).unwrap();
    std::fs::write(dated_dir(&logs, date()).join("15.txt"), "").unwrap();

    let targets = [(tables.as_path(), "csv"), (logs.as_path(), "txt")];
    let stem = next_dated_stem(date(), &targets).unwrap();
    assert_eq!(stem, "15 (1)");
    assert!(dated_dir(&tables, date()).is_dir());
}

#[test]
fn test_dated_dir_uses_year_and_month_name() {
    let dir = dated_dir(Path::new("files/tables"), date());
    assert_eq!(dir, Path::new("files/tables/2025/September"));
}

#[test]
fn test_session_file_never_overwrites() {
    let ws = workspace();
    let table = signed_table();

    let first = write_session(&table, ws.path(), date()).unwrap();
    let second = write_session(&table, ws.path(), date()).unwrap();

    assert_eq!(first, ws.path().join("2025").join("September").join("15.csv"));
    assert_eq!(second, ws.path().join("2025").join("September").join("15 (1).csv"));
    assert_eq!(dated_files(ws.path(), date(), "csv").unwrap(), vec![first, second]);
}

#[test]
fn test_session_file_columns() {
    let ws = workspace();
    let path = write_session(&signed_table(), ws.path(), date()).unwrap();

    let rows = read_session(&path).unwrap();
    assert_eq!(rows.len(), 2);

    let alice = &rows[0];
    assert_eq!(alice.full_name, "Alice Smith");
    assert!((alice.hours_spent - 1.5).abs() < 1e-9);
    assert_eq!(alice.credit, 1);

    let bob = &rows[1];
    assert_eq!(bob.hours_spent, 0.0);
    assert_eq!(bob.credit, 0);
}

#[test]
fn test_timestamps_round_trip_through_session_file() {
    let ws = workspace();
    let table = signed_table();
    let path = write_session(&table, ws.path(), date()).unwrap();

    let rows = read_session(&path).unwrap();
    for (row, (_, record)) in rows.iter().zip(table.iter()) {
        assert_eq!(decode_timestamps(&row.times).unwrap(), record.times);
    }
}

#[test]
fn test_empty_history_encodes_as_empty_list() {
    assert_eq!(encode_timestamps(&[]).unwrap(), "[]");
    assert!(decode_timestamps("[]").unwrap().is_empty());
    assert!(decode_timestamps("['2025-09-15']").is_err());
}
