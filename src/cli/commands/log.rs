use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::{LogLogic, log_files_for};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { date } = cmd {
        let day = resolve_date(date.as_deref())?;
        let files = log_files_for(&cfg.logs_dir(), day)?;

        if files.is_empty() {
            info(format!("No session logs for {day}"));
        }
        for path in files {
            LogLogic::print_log(&path)?;
            println!();
        }
    }

    Ok(())
}
