// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse `--range` into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start_raw, end_raw) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r.trim(), r.trim()),
    };

    if start_raw.len() != end_raw.len() {
        return Err(AppError::InvalidDate(format!(
            "start and end of '{r}' must have the same format"
        )));
    }

    let start = period_start(start_raw)?;
    let end = period_end(end_raw)?;

    if end < start {
        return Err(AppError::InvalidDate(format!("range '{r}' ends before it starts")));
    }

    Ok((start, end))
}

/// First day covered by a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_start(p: &str) -> AppResult<NaiveDate> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)
        }
        7 => {
            let (y, m) = year_month(p).ok_or_else(invalid)?;
            NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)
        }
        10 => NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid()),
        _ => Err(AppError::InvalidDate(format!(
            "unsupported --range format '{p}'"
        ))),
    }
}

/// Last day covered by a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_end(p: &str) -> AppResult<NaiveDate> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)
        }
        7 => {
            let (y, m) = year_month(p).ok_or_else(invalid)?;
            let last = month_last_day(y, m).ok_or_else(invalid)?;
            NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)
        }
        _ => period_start(p),
    }
}

fn year_month(p: &str) -> Option<(i32, u32)> {
    let (y, m) = p.split_once('-')?;
    Some((y.parse().ok()?, m.parse().ok()?))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    let next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day())
}
