mod common;
use chrono::Duration;
use common::at;
use rtattendance::core::engine::sign_at;
use rtattendance::core::session::SessionTable;
use rtattendance::errors::AppError;
use rtattendance::models::member::Member;
use rtattendance::models::sign::{Presence, SignDirection};

fn table() -> SessionTable {
    SessionTable::new(&[
        Member::new(1, "Alice Smith", 9),
        Member::new(2, "Bob Jones", 12),
    ])
}

#[test]
fn test_sign_in_leaves_total_untouched() {
    let mut t = table();
    let key = t.validate("1").expect("known member");

    let dir = sign_at(key, &mut t, Duration::hours(2), at(9, 0, 0));

    assert_eq!(dir, SignDirection::In);
    let rec = t.record(key);
    assert_eq!(rec.times.len(), 1);
    assert_eq!(rec.presence, Presence::SignedIn);
    assert_eq!(rec.total, Duration::zero());
    assert!(!rec.credit);
}

#[test]
fn test_sign_out_adds_visit_length() {
    let mut t = table();
    let key = t.validate("1").unwrap();

    sign_at(key, &mut t, Duration::hours(2), at(9, 0, 0));
    let dir = sign_at(key, &mut t, Duration::hours(2), at(9, 45, 30));

    assert_eq!(dir, SignDirection::Out);
    let rec = t.record(key);
    assert_eq!(rec.times.len(), 2);
    assert_eq!(rec.presence, Presence::SignedOut);
    assert_eq!(rec.total, Duration::minutes(45) + Duration::seconds(30));
    assert!(!rec.credit);
}

#[test]
fn test_visits_accumulate_and_credit_flips_at_threshold() {
    let mut t = table();
    let key = t.validate("2").unwrap();
    let required = Duration::hours(2);

    sign_at(key, &mut t, required, at(9, 0, 0));
    sign_at(key, &mut t, required, at(10, 0, 0));
    assert!(!t.record(key).credit);

    // second visit, credit does not change while signed in
    sign_at(key, &mut t, required, at(13, 0, 0));
    assert!(!t.record(key).credit);
    assert_eq!(t.record(key).total, Duration::hours(1));

    sign_at(key, &mut t, required, at(14, 0, 0));
    assert_eq!(t.record(key).total, Duration::hours(2));
    // exactly the threshold counts
    assert!(t.record(key).credit);
}

#[test]
fn test_parity_matches_presence() {
    let mut t = table();
    let key = t.validate("1").unwrap();

    for i in 0..7u32 {
        let dir = sign_at(key, &mut t, Duration::hours(1), at(9, i, 0));
        let rec = t.record(key);
        assert_eq!(rec.times.len() % 2 == 1, rec.is_signed_in());
        assert_eq!(dir.is_in(), rec.times.len() % 2 == 1);
    }
}

#[test]
fn test_scenario_short_threshold() {
    // requiredHours = 0.001 → 3.6 s
    let required = Duration::milliseconds(3_600);
    let mut t = table();

    let alice = t.validate("1").unwrap();
    sign_at(alice, &mut t, required, at(9, 0, 0));
    sign_at(alice, &mut t, required, at(9, 0, 4));

    let bob = t.validate("2").unwrap();
    sign_at(bob, &mut t, required, at(9, 0, 1));

    assert!(t.record(alice).credit);
    assert_eq!(t.record(alice).total, Duration::seconds(4));

    assert_eq!(t.record(bob).times.len(), 1);
    assert!(!t.record(bob).credit);
    assert!(t.record(bob).is_signed_in());

    let still_in: Vec<i64> = t.signed_in().map(|m| m.id).collect();
    assert_eq!(still_in, vec![2]);
}

#[test]
fn test_signing_one_member_does_not_touch_others() {
    let mut t = table();
    let alice = t.validate("1").unwrap();
    sign_at(alice, &mut t, Duration::hours(1), at(9, 0, 0));

    let bob = t.record_by_id(2).unwrap();
    assert!(bob.times.is_empty());
    assert_eq!(bob.presence, Presence::SignedOut);
}

#[test]
fn test_validate_rejects_bad_input() {
    let t = table();

    assert!(matches!(t.validate("abc"), Err(AppError::InvalidId(s)) if s == "abc"));
    assert!(matches!(t.validate("42"), Err(AppError::UnknownMember(42))));
    assert!(t.validate("  2 ").is_ok());

    let err = t.validate("abc").unwrap_err();
    assert!(err.is_recoverable());
}
