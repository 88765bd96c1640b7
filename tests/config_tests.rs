mod common;
use chrono::Duration;
use common::{workspace, write_config};
use rtattendance::config::{Config, ConfigValue};
use rtattendance::errors::AppError;
use rtattendance::models::theme::Theme;

#[test]
fn test_missing_config_is_created_with_defaults() {
    let ws = workspace();
    let cfg = Config::load(ws.path()).expect("defaults");

    assert!(ws.path().join("config.cfg").is_file());
    assert_eq!(cfg.required_hours, 2.0);
    assert_eq!(cfg.required_duration(), Duration::hours(2));
    assert_eq!(cfg.new_member_grade, 9);
    assert_eq!(cfg.roster_path(), ws.path().join("Member List.csv"));
    assert_eq!(cfg.ledger_path(), ws.path().join("Output Table.csv"));
}

#[test]
fn test_background_is_required_to_start() {
    let ws = workspace();
    let cfg = Config::load(ws.path()).unwrap();
    assert!(matches!(
        cfg.theme(),
        Err(AppError::MissingConfigValue("backgroundColor"))
    ));
}

#[test]
fn test_background_closed_set() {
    let cfg = Config::parse_str("backgroundColor=purple\n").unwrap();
    assert!(matches!(cfg.theme(), Err(AppError::InvalidBackground(c)) if c == "purple"));

    for (raw, theme) in [
        ("light", Theme::Light),
        ("dark", Theme::Dark),
        ("white", Theme::Light),
        ("black", Theme::Dark),
    ] {
        let cfg = Config::parse_str(&format!("backgroundColor={raw}")).unwrap();
        assert_eq!(cfg.theme().unwrap(), theme);
    }
}

#[test]
fn test_values_are_typed() {
    assert_eq!(ConfigValue::parse("2"), ConfigValue::Number(2.0));
    assert_eq!(ConfigValue::parse(" 0.5 "), ConfigValue::Number(0.5));
    assert_eq!(ConfigValue::parse("dark"), ConfigValue::Text("dark".into()));
    assert_eq!(ConfigValue::parse("Member List.csv"), ConfigValue::Text("Member List.csv".into()));
}

#[test]
fn test_parse_full_file() {
    let ws = workspace();
    write_config(
        ws.path(),
        "# attendance\nrequiredHours=0.001\nbackgroundColor = dark\nnewMemberGrade=10\n\
         memberList=roster.csv\nnot a setting\nfoo=bar\n",
    );

    let cfg = Config::load(ws.path()).unwrap();
    assert_eq!(cfg.required_duration(), Duration::milliseconds(3_600));
    assert_eq!(cfg.theme().unwrap(), Theme::Dark);
    assert_eq!(cfg.new_member_grade, 10);
    assert_eq!(cfg.roster_path(), ws.path().join("roster.csv"));
    assert_eq!(cfg.extra.get("foo"), Some(&ConfigValue::Text("bar".into())));

    let issues = cfg.check();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("foo"));
}

#[test]
fn test_non_numeric_hours_are_rejected() {
    assert!(matches!(
        Config::parse_str("requiredHours=lots"),
        Err(AppError::Config(_))
    ));
    assert!(Config::parse_str("requiredHours=-1").is_err());
    assert!(Config::parse_str("newMemberGrade=9.5").is_err());
}

#[test]
fn test_init_never_clobbers_existing_config() {
    let ws = workspace();
    write_config(ws.path(), "requiredHours=3\nbackgroundColor=light\n");

    let created = Config::init_all(ws.path(), Theme::Dark, 2.0, 9).unwrap();
    assert!(!created);

    let cfg = Config::load(ws.path()).unwrap();
    assert_eq!(cfg.required_hours, 3.0);
    assert_eq!(cfg.theme().unwrap(), Theme::Light);
    assert!(ws.path().join("Member List.csv").is_file());
}
