use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::theme::Theme;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the workspace directory (if missing)
///  - the configuration file
///  - an empty member list with the expected header
pub fn handle(cmd: &Commands, workspace: &Path) -> AppResult<()> {
    if let Commands::Init {
        background,
        required_hours,
        new_member_grade,
    } = cmd
    {
        let theme = Theme::from(*background);

        println!("⚙️  Initializing rtattendance…");
        let created = Config::init_all(workspace, theme, *required_hours, *new_member_grade)?;

        let path = Config::config_file(workspace);
        if created {
            success(format!("Config file : {}", path.display()));
        } else {
            info(format!("Config file already present, left untouched: {}", path.display()));
        }

        let cfg = Config::load(workspace)?;
        println!("👥 Member list : {}", cfg.roster_path().display());
        println!("📒 Ledger      : {}", cfg.ledger_path().display());

        success("rtattendance initialization completed!");
    }

    Ok(())
}
