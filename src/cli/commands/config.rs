use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::error;
use std::path::Path;

/// Handle the `config` subcommand
///
/// Works on the raw file, so a broken config can still be printed and edited.
pub fn handle(cmd: &Commands, workspace: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file(workspace);

        if *print_config {
            ConfigLogic::print(&path)?;
        }

        if *check {
            match Config::load(workspace) {
                Ok(cfg) => {
                    ConfigLogic::check(&cfg);
                }
                Err(e) => error(e),
            }
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
