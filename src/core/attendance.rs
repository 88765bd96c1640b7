//! The coordinating object of a running session.
//!
//! Owns every piece of per-run state (config, roster, ledger, session table
//! and log) and is handed explicitly to the interactive loop.

use crate::config::Config;
use crate::core::engine::sign_at;
use crate::core::ledger::Ledger;
use crate::core::log::SessionLog;
use crate::core::persist::{write_ledger, write_session_to};
use crate::core::roster::load_members;
use crate::core::session::SessionTable;
use crate::errors::AppResult;
use crate::models::member::Member;
use crate::models::sign::SignDirection;
use crate::models::theme::Theme;
use crate::utils::path::{dated_dir, next_dated_stem};
use chrono::{DateTime, Duration, Local};
use std::path::PathBuf;

/// Result of a successful sign event.
#[derive(Debug, Clone)]
pub struct SignOutcome {
    pub member: Member,
    pub direction: SignDirection,
    pub credit: bool,
}

impl SignOutcome {
    pub fn message(&self) -> String {
        format!(
            "{}: you have successfully signed {}!",
            self.member.full_name,
            self.direction.as_str()
        )
    }
}

/// What `finish` wrote to disk.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub column: String,
    pub table_path: PathBuf,
    pub ledger_path: PathBuf,
    pub log_path: PathBuf,
    pub credited: usize,
    pub still_signed_in: Vec<Member>,
}

pub struct AttendanceSession {
    cfg: Config,
    theme: Theme,
    required: Duration,
    ledger: Ledger,
    table: SessionTable,
    table_path: PathBuf,
    log: SessionLog,
}

impl AttendanceSession {
    pub fn start(cfg: Config) -> AppResult<Self> {
        Self::start_at(cfg, Local::now())
    }

    /// Load everything a session needs. Any failure here is fatal.
    pub fn start_at(cfg: Config, now: DateTime<Local>) -> AppResult<Self> {
        let theme = cfg.theme()?;
        let members = load_members(&cfg.roster_path(), cfg.new_member_grade)?;

        let date = now.date_naive();
        let mut ledger = Ledger::load_or_init(&cfg.ledger_path(), &members)?.merge(&members);
        ledger.open_session(date);

        let table = SessionTable::new(&members);

        // table and log of one session share their `<day>[ (n)]` stem
        let (tables_dir, logs_dir) = (cfg.tables_dir(), cfg.logs_dir());
        let stem = next_dated_stem(
            date,
            &[(tables_dir.as_path(), "csv"), (logs_dir.as_path(), "txt")],
        )?;
        let table_path = dated_dir(&tables_dir, date).join(format!("{stem}.csv"));

        let mut log = SessionLog::create(dated_dir(&logs_dir, date).join(format!("{stem}.txt")))?;
        log.write_at(
            now,
            "start",
            "",
            &format!("session started with {} members", members.len()),
        )?;

        Ok(Self {
            required: cfg.required_duration(),
            cfg,
            theme,
            ledger,
            table,
            table_path,
            log,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn table(&self) -> &SessionTable {
        &self.table
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn handle_input(&mut self, raw: &str) -> AppResult<SignOutcome> {
        self.handle_input_at(raw, Local::now())
    }

    /// Validate `raw` as a member identifier, then sign that member.
    ///
    /// Validation errors leave all state untouched.
    pub fn handle_input_at(&mut self, raw: &str, now: DateTime<Local>) -> AppResult<SignOutcome> {
        let key = self.table.validate(raw)?;
        let direction = sign_at(key, &mut self.table, self.required, now);

        let member = self.table.member(key).clone();
        let credit = self.table.record(key).credit;

        self.log.write_at(
            now,
            direction.as_str(),
            &member.id.to_string(),
            &format!("{} signed {}", member.full_name, direction.as_str()),
        )?;

        Ok(SignOutcome {
            member,
            direction,
            credit,
        })
    }

    /// Persist the session table and the ledger, then close the log.
    pub fn finish(self) -> AppResult<SessionSummary> {
        self.finish_at(Local::now())
    }

    pub fn finish_at(mut self, now: DateTime<Local>) -> AppResult<SessionSummary> {
        self.ledger.record_credits(&self.table)?;

        write_session_to(&self.table, &self.table_path)?;
        let table_path = self.table_path.clone();
        let ledger_path = self.cfg.ledger_path();
        write_ledger(&self.ledger, &ledger_path)?;

        self.log.write_at(
            now,
            "save",
            "",
            &format!("{} and {}", table_path.display(), ledger_path.display()),
        )?;

        let credited = self.table.iter().filter(|(_, r)| r.credit).count();
        let still_signed_in: Vec<Member> = self.table.signed_in().cloned().collect();

        self.log.write_at(
            now,
            "end",
            "",
            &format!(
                "session ended: {credited} credited, {} still signed in",
                still_signed_in.len()
            ),
        )?;

        Ok(SessionSummary {
            column: self
                .ledger
                .current_session()
                .unwrap_or_default()
                .to_string(),
            table_path,
            ledger_path,
            log_path: self.log.path().to_path_buf(),
            credited,
            still_signed_in,
        })
    }
}
