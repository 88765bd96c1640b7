//! Session and ledger serialization.

use crate::core::ledger::Ledger;
use crate::core::session::SessionTable;
use crate::errors::AppResult;
use crate::utils::path::next_dated_file;
use crate::utils::time::encode_timestamps;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One line of a session table file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRow {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "Grade")]
    pub grade: i64,
    /// JSON array of RFC 3339 timestamps.
    #[serde(rename = "Times")]
    pub times: String,
    #[serde(rename = "Hours Spent")]
    pub hours_spent: f64,
    #[serde(rename = "Credit")]
    pub credit: u8,
}

pub fn session_rows(table: &SessionTable) -> AppResult<Vec<SessionRow>> {
    table
        .iter()
        .map(|(member, record)| {
            Ok(SessionRow {
                id: member.id,
                full_name: member.full_name.clone(),
                grade: member.grade,
                times: encode_timestamps(&record.times)?,
                hours_spent: record.hours_spent(),
                credit: u8::from(record.credit),
            })
        })
        .collect()
}

/// Write the session table under `tables_dir/<year>/<Month>/<day>.csv`.
///
/// An existing file is never overwritten: the name gets a ` (n)` suffix instead.
pub fn write_session(table: &SessionTable, tables_dir: &Path, date: NaiveDate) -> AppResult<PathBuf> {
    let path = next_dated_file(tables_dir, date, "csv")?;
    write_session_to(table, &path)?;
    Ok(path)
}

/// Write the session table to a path reserved at session start.
pub fn write_session_to(table: &SessionTable, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::Writer::from_path(path)?;
    for row in session_rows(table)? {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Overwrite the canonical ledger file with the merged table.
pub fn write_ledger(ledger: &Ledger, path: &Path) -> AppResult<()> {
    ledger.write(path)
}

/// Read back a session table file.
pub fn read_session(path: &Path) -> AppResult<Vec<SessionRow>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
