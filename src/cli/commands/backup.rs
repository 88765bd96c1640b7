use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, force } = cmd {
        let entries = BackupLogic::backup(cfg, file, *force)?;
        for entry in &entries {
            info(format!("archived {entry}"));
        }
    }

    Ok(())
}
