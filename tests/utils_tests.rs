use chrono::NaiveDate;
use rtattendance::core::backup::ArchiveKind;
use rtattendance::export::range::parse_range;
use rtattendance::utils::date::{column_date, resolve_date};
use rtattendance::utils::hours2readable;
use rtattendance::utils::table::Table;
use std::path::Path;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_parse_range_shapes() {
    assert_eq!(parse_range("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(
        parse_range("2025-09-01:2025-09-15").unwrap(),
        (d(2025, 9, 1), d(2025, 9, 15))
    );
    assert_eq!(parse_range("2023-02").unwrap(), (d(2023, 2, 1), d(2023, 2, 28)));
    assert_eq!(parse_range("1900-02").unwrap(), (d(1900, 2, 1), d(1900, 2, 28)));
    assert_eq!(parse_range("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
    assert_eq!(
        parse_range("2025-01:2025-03").unwrap(),
        (d(2025, 1, 1), d(2025, 3, 31))
    );
}

#[test]
fn test_parse_range_rejects_bad_input() {
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025:2025-03").is_err());
    assert!(parse_range("2025-09:2025-01").is_err());
    assert!(parse_range("yesterday").is_err());
}

#[test]
fn test_column_date_ignores_suffix() {
    assert_eq!(column_date("2025-09-15"), Some(d(2025, 9, 15)));
    assert_eq!(column_date("2025-09-15 (2)"), Some(d(2025, 9, 15)));
    assert_eq!(column_date("Credited"), None);
}

#[test]
fn test_resolve_date() {
    assert_eq!(resolve_date(Some("2025-09-15")).unwrap(), d(2025, 9, 15));
    assert!(resolve_date(Some("15/09/2025")).is_err());
    assert!(resolve_date(None).is_ok());
}

#[test]
fn test_archive_kind_from_name() {
    assert_eq!(ArchiveKind::from_path(Path::new("b.zip")), Some(ArchiveKind::Zip));
    assert_eq!(ArchiveKind::from_path(Path::new("B.TAR.GZ")), Some(ArchiveKind::TarGz));
    assert_eq!(ArchiveKind::from_path(Path::new("b.tgz")), Some(ArchiveKind::TarGz));
    assert_eq!(ArchiveKind::from_path(Path::new("b.tar")), None);
}

#[test]
fn test_hours2readable() {
    assert_eq!(hours2readable(0.0), "00h 00m");
    assert_eq!(hours2readable(2.5), "02h 30m");
    assert_eq!(hours2readable(-1.0), "00h 00m");
}

#[test]
fn test_table_pads_columns() {
    let mut table = Table::with_headers(&["ID", "Full Name"]);
    table.add_row(vec!["12".to_string(), "Zoë Ñúñez".to_string()]);
    let out = table.render();

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("ID"));
    assert!(lines.iter().any(|l| l.contains("Zoë Ñúñez")));
}
