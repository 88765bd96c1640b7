use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { date } = cmd {
        ReportLogic::sessions(cfg, resolve_date(date.as_deref())?)?;
    }
    Ok(())
}
