use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ledger { totals } = cmd {
        ReportLogic::ledger(cfg, *totals)?;
    }
    Ok(())
}
