mod common;
use chrono::{Duration, NaiveDate};
use common::{at, workspace};
use rtattendance::core::engine::sign_at;
use rtattendance::core::ledger::Ledger;
use rtattendance::core::session::SessionTable;
use rtattendance::errors::AppError;
use rtattendance::models::member::Member;
use std::fs;

fn roster() -> Vec<Member> {
    vec![Member::new(2, "Bob Jones", 12), Member::new(1, "Alice Smith", 9)]
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
}

#[test]
fn test_absent_ledger_initializes_from_roster() {
    let ws = workspace();
    let path = ws.path().join("Output Table.csv");

    let ledger = Ledger::load_or_init(&path, &roster()).expect("ledger");

    assert!(ledger.sessions.is_empty());
    let ids: Vec<i64> = ledger.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert!(ledger.rows.iter().all(|r| r.credits.is_empty()));
}

#[test]
fn test_empty_ledger_file_counts_as_absent() {
    let ws = workspace();
    let path = ws.path().join("Output Table.csv");
    fs::write(&path, "").unwrap();

    assert!(Ledger::load(&path).unwrap().is_none());
    assert_eq!(Ledger::load_or_init(&path, &roster()).unwrap().rows.len(), 2);
}

#[test]
fn test_merge_drops_removed_and_adds_new_members() {
    let ws = workspace();
    let path = ws.path().join("Output Table.csv");
    fs::write(
        &path,
        "ID,Full Name,2025-09-01,2025-09-08\n\
         1,Alice Smith,1,0\n\
         3,Carl Brown,1,1\n",
    )
    .unwrap();

    let ledger = Ledger::load(&path).unwrap().unwrap().merge(&roster());

    assert_eq!(ledger.sessions, vec!["2025-09-01", "2025-09-08"]);
    assert_eq!(ledger.rows.len(), 2);

    // roster order, new member with blank history
    assert_eq!(ledger.rows[0].id, 2);
    assert_eq!(ledger.rows[0].credits, vec![None, None]);
    assert_eq!(ledger.rows[1].id, 1);
    assert_eq!(ledger.rows[1].credits, vec![Some(true), Some(false)]);
}

#[test]
fn test_merge_joins_on_id_and_name() {
    let mut ledger = Ledger::init(&[Member::new(1, "Alice Jones", 10)]);
    ledger.open_session(day(1));
    ledger.rows[0].credits[0] = Some(true);

    // same ID, renamed member → treated as a new row
    let merged = ledger.merge(&[Member::new(1, "Alice Smith", 10)]);
    assert_eq!(merged.rows[0].full_name, "Alice Smith");
    assert_eq!(merged.rows[0].credits, vec![None]);
}

#[test]
fn test_same_day_sessions_get_distinct_columns() {
    let mut ledger = Ledger::init(&roster());

    let first = ledger.open_session(day(15)).to_string();
    let second = ledger.open_session(day(15)).to_string();
    let third = ledger.open_session(day(15)).to_string();

    assert_eq!(first, "2025-09-15");
    assert_eq!(second, "2025-09-15 (1)");
    assert_eq!(third, "2025-09-15 (2)");
    assert_eq!(ledger.current_session(), Some("2025-09-15 (2)"));
}

#[test]
fn test_record_credits_and_write_blank_cells() {
    let ws = workspace();
    let path = ws.path().join("Output Table.csv");
    fs::write(&path, "ID,Full Name,2025-09-01\n1,Alice Smith,1\n").unwrap();

    let members = roster();
    let mut ledger = Ledger::load_or_init(&path, &members).unwrap().merge(&members);
    ledger.open_session(day(15));

    let mut table = SessionTable::new(&members);
    let bob = table.validate("2").unwrap();
    sign_at(bob, &mut table, Duration::minutes(30), at(9, 0, 0));
    sign_at(bob, &mut table, Duration::minutes(30), at(10, 0, 0));

    ledger.record_credits(&table).unwrap();
    ledger.write(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "ID,Full Name,2025-09-01,2025-09-15\n\
         2,Bob Jones,,1\n\
         1,Alice Smith,1,0\n"
    );
}

#[test]
fn test_record_credits_requires_open_session() {
    let members = roster();
    let mut ledger = Ledger::init(&members);
    assert!(ledger.record_credits(&SessionTable::new(&members)).is_err());
}

#[test]
fn test_spreadsheet_style_values_are_accepted() {
    let ws = workspace();
    let path = ws.path().join("Output Table.csv");
    fs::write(
        &path,
        "ID,Full Name,2025-09-01,2025-09-08,2025-09-15\n1.0,Alice Smith,True,0.0,\n",
    )
    .unwrap();

    let ledger = Ledger::load(&path).unwrap().unwrap();
    assert_eq!(ledger.rows[0].id, 1);
    assert_eq!(ledger.rows[0].credits, vec![Some(true), Some(false), None]);
}

#[test]
fn test_garbage_credit_is_malformed() {
    let ws = workspace();
    let path = ws.path().join("Output Table.csv");
    fs::write(&path, "ID,Full Name,2025-09-01\n1,Alice Smith,maybe\n").unwrap();

    assert!(matches!(
        Ledger::load(&path),
        Err(AppError::LedgerMalformed(_))
    ));
}

#[test]
fn test_filter_sessions_by_date() {
    let mut ledger = Ledger::init(&roster());
    ledger.open_session(day(1));
    ledger.open_session(day(8));
    ledger.open_session(day(8));
    ledger.open_session(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());

    let sept = ledger.filter_sessions(day(1), day(30));
    assert_eq!(sept.sessions, vec!["2025-09-01", "2025-09-08", "2025-09-08 (1)"]);
    assert!(sept.rows.iter().all(|r| r.credits.len() == 3));
}
