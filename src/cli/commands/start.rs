use crate::config::Config;
use crate::core::attendance::AttendanceSession;
use crate::core::shell::Shell;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io;

/// Handle the `start` command: one attendance session on stdin/stdout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = AttendanceSession::start(cfg.clone())?;

    let stdin = io::stdin();
    let summary = Shell::new(stdin.lock(), io::stdout()).run(session)?;

    success(format!("Session '{}' saved", summary.column));
    info(format!("Session table : {}", summary.table_path.display()));
    info(format!("Ledger        : {}", summary.ledger_path.display()));
    info(format!("Log           : {}", summary.log_path.display()));
    info(format!("{} member(s) earned credit", summary.credited));

    if !summary.still_signed_in.is_empty() {
        let names: Vec<&str> = summary
            .still_signed_in
            .iter()
            .map(|m| m.full_name.as_str())
            .collect();
        warning(format!("Still signed in at shutdown: {}", names.join(", ")));
    }

    Ok(())
}
