//! Timestamp (de)serialization.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, SecondsFormat};

/// ISO-8601 / RFC 3339 with second precision and the local offset.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Serialize a timestamp list as a JSON array of strings, for a single CSV cell.
pub fn encode_timestamps(times: &[DateTime<Local>]) -> AppResult<String> {
    let strings: Vec<String> = times.iter().map(format_timestamp).collect();
    Ok(serde_json::to_string(&strings)?)
}

pub fn decode_timestamps(cell: &str) -> AppResult<Vec<DateTime<Local>>> {
    let strings: Vec<String> = serde_json::from_str(cell)?;
    strings.iter().map(|s| parse_timestamp(s)).collect()
}
