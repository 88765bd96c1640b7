//! Cumulative cross-session credit table (`Output Table.csv`).

use crate::core::session::SessionTable;
use crate::errors::{AppError, AppResult};
use crate::models::ledger_row::LedgerRow;
use crate::models::member::Member;
use crate::utils::date::column_date;
use crate::utils::path::unique_name;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const ID_HEADER: &str = "ID";
pub const NAME_HEADER: &str = "Full Name";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    /// Session column names, oldest first.
    pub sessions: Vec<String>,
    pub rows: Vec<LedgerRow>,
    /// Index into `sessions` of the column opened by this run.
    current: Option<usize>,
}

impl Ledger {
    /// One row per member, no history.
    pub fn init(members: &[Member]) -> Self {
        Self {
            sessions: Vec::new(),
            rows: members
                .iter()
                .map(|m| LedgerRow::new(m.id, &m.full_name))
                .collect(),
            current: None,
        }
    }

    /// Read a ledger file. `Ok(None)` when the file is absent or empty.
    pub fn load(path: &Path) -> AppResult<Option<Self>> {
        if !path.is_file() || fs::metadata(path)?.len() == 0 {
            return Ok(None);
        }

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers = rdr.headers()?.clone();
        if headers.iter().all(|h| h.is_empty()) {
            return Ok(None);
        }

        if headers.get(0) != Some(ID_HEADER) || headers.get(1) != Some(NAME_HEADER) {
            return Err(AppError::LedgerMalformed(format!(
                "expected the first columns to be '{ID_HEADER}' and '{NAME_HEADER}'"
            )));
        }

        let sessions: Vec<String> = headers.iter().skip(2).map(str::to_string).collect();
        let mut rows = Vec::new();

        for result in rdr.records() {
            let record = result?;
            let raw_id = record.get(0).unwrap_or_default();
            let id = parse_id(raw_id)
                .ok_or_else(|| AppError::LedgerMalformed(format!("invalid ID '{raw_id}'")))?;

            let mut row = LedgerRow::new(id, record.get(1).unwrap_or_default());
            for cell in record.iter().skip(2) {
                let credit = parse_credit(cell).ok_or_else(|| {
                    AppError::LedgerMalformed(format!("invalid credit value '{cell}' for ID {id}"))
                })?;
                row.credits.push(credit);
            }
            rows.push(row);
        }

        Ok(Some(Self {
            sessions,
            rows,
            current: None,
        }))
    }

    /// Existing ledger, or a fresh one for `members` when there is no history yet.
    pub fn load_or_init(path: &Path, members: &[Member]) -> AppResult<Self> {
        Ok(Self::load(path)?.unwrap_or_else(|| Self::init(members)))
    }

    /// Join with the current roster on (ID, full name).
    ///
    /// Rows follow roster order: members no longer on the roster are dropped,
    /// new members get a row with a blank history.
    pub fn merge(&self, members: &[Member]) -> Self {
        let existing: HashMap<(i64, &str), &LedgerRow> = self
            .rows
            .iter()
            .map(|r| ((r.id, r.full_name.as_str()), r))
            .collect();

        let rows = members
            .iter()
            .map(|m| match existing.get(&(m.id, m.full_name.as_str())) {
                Some(row) => {
                    let mut row = (*row).clone();
                    row.credits.resize(self.sessions.len(), None);
                    row
                }
                None => LedgerRow {
                    id: m.id,
                    full_name: m.full_name.clone(),
                    credits: vec![None; self.sessions.len()],
                },
            })
            .collect();

        Self {
            sessions: self.sessions.clone(),
            rows,
            current: self.current,
        }
    }

    /// Append the column for a session held on `date` and return its name.
    ///
    /// The column is named `YYYY-MM-DD`; later sessions on the same day get
    /// ` (1)`, ` (2)`, ... appended. Every row starts out without credit.
    pub fn open_session(&mut self, date: NaiveDate) -> &str {
        let name = unique_name(&date.format("%Y-%m-%d").to_string(), &self.sessions);
        self.sessions.push(name);
        for row in &mut self.rows {
            row.credits.push(Some(false));
        }
        let idx = self.sessions.len() - 1;
        self.current = Some(idx);
        &self.sessions[idx]
    }

    pub fn current_session(&self) -> Option<&str> {
        self.current.map(|i| self.sessions[i].as_str())
    }

    /// Copy every member's credit from the session table into the current column.
    pub fn record_credits(&mut self, table: &SessionTable) -> AppResult<()> {
        let idx = self
            .current
            .ok_or_else(|| AppError::Other("no session column opened in the ledger".into()))?;

        for row in &mut self.rows {
            row.credits[idx] = table.record_by_id(row.id).map(|r| r.credit);
        }
        Ok(())
    }

    /// Keep only the session columns dated within `[start, end]`.
    pub fn filter_sessions(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let keep: Vec<usize> = self
            .sessions
            .iter()
            .enumerate()
            .filter(|(_, s)| column_date(s).is_some_and(|d| d >= start && d <= end))
            .map(|(i, _)| i)
            .collect();

        Self {
            sessions: keep.iter().map(|&i| self.sessions[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| LedgerRow {
                    id: r.id,
                    full_name: r.full_name.clone(),
                    credits: keep.iter().map(|&i| r.credits[i]).collect(),
                })
                .collect(),
            current: None,
        }
    }

    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![ID_HEADER.to_string(), NAME_HEADER.to_string()];
        headers.extend(self.sessions.iter().cloned());
        headers
    }

    /// Rows as the ledger file stores them: blank for absent, 0/1 otherwise.
    pub fn to_table(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                let mut cells = vec![r.id.to_string(), r.full_name.clone()];
                cells.extend(r.credits.iter().map(|c| LedgerRow::cell(*c)));
                cells
            })
            .collect()
    }

    /// Overwrite `path` with the full table.
    pub fn write(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(self.headers())?;
        for row in self.to_table() {
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn parse_id(s: &str) -> Option<i64> {
    s.parse::<i64>().ok().or_else(|| {
        // spreadsheets like to turn integer columns into floats
        s.parse::<f64>()
            .ok()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

fn parse_credit(s: &str) -> Option<Option<bool>> {
    match s.to_lowercase().as_str() {
        "" | "nan" => Some(None),
        "1" | "1.0" | "true" => Some(Some(true)),
        "0" | "0.0" | "false" => Some(Some(false)),
        _ => None,
    }
}
