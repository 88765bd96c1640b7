use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Date part of a ledger session column (`YYYY-MM-DD` or `YYYY-MM-DD (n)`).
pub fn column_date(column: &str) -> Option<NaiveDate> {
    column.get(..10).and_then(parse_date)
}

/// `Some("YYYY-MM-DD")` parsed, `None` → today.
pub fn resolve_date(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}
