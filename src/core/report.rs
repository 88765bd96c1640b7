//! Read-only views printed by `members`, `ledger` and `report`.

use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::persist::read_session;
use crate::core::roster::load_members;
use crate::errors::AppResult;
use crate::models::member::Member;
use crate::ui::messages::{header, info, warning};
use crate::utils::formatting::describe_credit;
use crate::utils::hours2readable;
use crate::utils::path::dated_files;
use crate::utils::table::Table;
use crate::utils::time::decode_timestamps;
use chrono::NaiveDate;
use std::path::PathBuf;

pub fn members_table(members: &[Member], new_member_grade: i64) -> Table {
    let mut table = Table::with_headers(&["ID", "Full Name", "Grade", "New"]);
    for m in members {
        table.add_row(vec![
            m.id.to_string(),
            m.full_name.clone(),
            m.grade.to_string(),
            if m.is_new(new_member_grade) { "yes" } else { "" }.to_string(),
        ]);
    }
    table
}

pub fn ledger_table(ledger: &Ledger, totals: bool) -> Table {
    let mut headers = ledger.headers();
    if totals {
        headers.push("Credited".to_string());
    }

    let mut table = Table::with_headers(&headers);
    for row in &ledger.rows {
        let mut cells = vec![row.id.to_string(), row.full_name.clone()];
        cells.extend(row.credits.iter().map(|c| describe_credit(*c).to_string()));
        if totals {
            cells.push(format!("{}/{}", row.credited(), ledger.sessions.len()));
        }
        table.add_row(cells);
    }
    table
}

/// Session table files saved on `date`, oldest first.
pub fn session_files_for(cfg: &Config, date: NaiveDate) -> AppResult<Vec<PathBuf>> {
    Ok(dated_files(&cfg.tables_dir(), date, "csv")?)
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn members(cfg: &Config) -> AppResult<()> {
        let members = load_members(&cfg.roster_path(), cfg.new_member_grade)?;
        header(format!("Members ({})", members.len()));
        print!("{}", members_table(&members, cfg.new_member_grade).render());
        Ok(())
    }

    pub fn ledger(cfg: &Config, totals: bool) -> AppResult<()> {
        let path = cfg.ledger_path();
        match Ledger::load(&path)? {
            Some(ledger) => {
                header(format!("Output ledger: {} sessions", ledger.sessions.len()));
                print!("{}", ledger_table(&ledger, totals).render());
            }
            None => warning(format!("No ledger found at {}", path.display())),
        }
        Ok(())
    }

    /// Print every session table saved on `date`.
    pub fn sessions(cfg: &Config, date: NaiveDate) -> AppResult<()> {
        let files = session_files_for(cfg, date)?;
        if files.is_empty() {
            info(format!("No sessions saved on {date}"));
            return Ok(());
        }

        for path in files {
            header(path.display());

            let mut table =
                Table::with_headers(&["ID", "Full Name", "Visits", "Hours", "Credit", "Status"]);
            for row in read_session(&path)? {
                let times = decode_timestamps(&row.times)?;
                let status = if times.len() % 2 == 1 { "signed in" } else { "" };
                table.add_row(vec![
                    row.id.to_string(),
                    row.full_name,
                    times.len().div_ceil(2).to_string(),
                    hours2readable(row.hours_spent),
                    describe_credit(Some(row.credit == 1)).to_string(),
                    status.to_string(),
                ]);
            }
            print!("{}", table.render());
        }
        Ok(())
    }
}
