use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        println!("📄 {}:\n", path.display());
        println!("{}", content);
        Ok(())
    }

    /// Report problems; returns `true` when there are none.
    pub fn check(cfg: &Config) -> bool {
        let issues = cfg.check();
        if issues.is_empty() {
            success("Configuration is complete.");
            return true;
        }
        for issue in &issues {
            warning(issue);
        }
        false
    }

    /// Open the config file in `editor`, `$EDITOR`, `$VISUAL` or a platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        let status = Command::new(&ed).arg(path).status();
        match status {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited successfully using '{ed}'"));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{ed}' not available, falling back to '{default_editor}'"
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor '{ed}' exited with {s}"))),
            Err(e) => Err(AppError::Config(format!("cannot run editor '{ed}': {e}"))),
        }
    }
}
