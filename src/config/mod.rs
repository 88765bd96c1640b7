//! Workspace configuration, read from a line-oriented `key=value` file.

use crate::errors::{AppError, AppResult};
use crate::models::theme::Theme;
use chrono::Duration;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.cfg";

pub const KEY_REQUIRED_HOURS: &str = "requiredHours";
pub const KEY_BACKGROUND: &str = "backgroundColor";
pub const KEY_NEW_MEMBER_GRADE: &str = "newMemberGrade";
pub const KEY_MEMBER_LIST: &str = "memberList";
pub const KEY_OUTPUT_TABLE: &str = "outputTable";

const KNOWN_KEYS: [&str; 5] = [
    KEY_REQUIRED_HOURS,
    KEY_BACKGROUND,
    KEY_NEW_MEMBER_GRADE,
    KEY_MEMBER_LIST,
    KEY_OUTPUT_TABLE,
];

fn default_required_hours() -> f64 {
    2.0
}
fn default_new_member_grade() -> i64 {
    9
}
fn default_member_list() -> String {
    "Member List.csv".to_string()
}
fn default_output_table() -> String {
    "Output Table.csv".to_string()
}

/// A config value, typed the way a YAML scalar would be.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Number(f64),
    Text(String),
}

impl ConfigValue {
    /// Numbers stay numbers, everything else is kept verbatim as text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match serde_yaml::from_str::<serde_yaml::Value>(raw) {
            Ok(serde_yaml::Value::Number(n)) => match n.as_f64() {
                Some(f) => ConfigValue::Number(f),
                None => ConfigValue::Text(raw.to_string()),
            },
            _ => ConfigValue::Text(raw.to_string()),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            ConfigValue::Number(n) => n.to_string(),
            ConfigValue::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub workspace: PathBuf,
    pub required_hours: f64,
    pub background_color: Option<String>,
    pub new_member_grade: i64,
    pub member_list: String,
    pub output_table: String,
    /// Keys present in the file but not recognized.
    pub extra: BTreeMap<String, ConfigValue>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: PathBuf::from("."),
            required_hours: default_required_hours(),
            background_color: None,
            new_member_grade: default_new_member_grade(),
            member_list: default_member_list(),
            output_table: default_output_table(),
            extra: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the full path of the config file inside a workspace
    pub fn config_file(workspace: &Path) -> PathBuf {
        workspace.join(CONFIG_FILE_NAME)
    }

    /// Load configuration from the workspace, creating an empty file when missing.
    pub fn load(workspace: &Path) -> AppResult<Self> {
        let path = Self::config_file(workspace);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::parse_str(&content)?
        } else {
            fs::create_dir_all(workspace)?;
            fs::File::create(&path)?;
            Config::default()
        };

        cfg.workspace = workspace.to_path_buf();
        Ok(cfg)
    }

    /// Parse the body of a config file. Lines without `=` and `#` comments are skipped.
    pub fn parse_str(content: &str) -> AppResult<Self> {
        let mut cfg = Config::default();

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            let Some((key, raw)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = ConfigValue::parse(raw);

            match key {
                KEY_REQUIRED_HOURS => {
                    cfg.required_hours = match value {
                        ConfigValue::Number(n) if n >= 0.0 && n.is_finite() => n,
                        other => {
                            return Err(AppError::Config(format!(
                                "{KEY_REQUIRED_HOURS} must be a non-negative number, got '{}'",
                                other.as_text()
                            )));
                        }
                    }
                }
                KEY_BACKGROUND => {
                    let text = value.as_text();
                    cfg.background_color = (!text.is_empty()).then_some(text);
                }
                KEY_NEW_MEMBER_GRADE => {
                    cfg.new_member_grade = match value {
                        ConfigValue::Number(n) if n.fract() == 0.0 => n as i64,
                        other => {
                            return Err(AppError::Config(format!(
                                "{KEY_NEW_MEMBER_GRADE} must be an integer, got '{}'",
                                other.as_text()
                            )));
                        }
                    }
                }
                KEY_MEMBER_LIST => cfg.member_list = value.as_text(),
                KEY_OUTPUT_TABLE => cfg.output_table = value.as_text(),
                _ => {
                    cfg.extra.insert(key.to_string(), value);
                }
            }
        }

        Ok(cfg)
    }

    /// Resolve `backgroundColor`. A session refuses to start without a valid one.
    pub fn theme(&self) -> AppResult<Theme> {
        let raw = self
            .background_color
            .as_deref()
            .ok_or(AppError::MissingConfigValue(KEY_BACKGROUND))?;
        Theme::from_config_str(raw).ok_or_else(|| AppError::InvalidBackground(raw.to_string()))
    }

    /// Credit threshold as a duration.
    pub fn required_duration(&self) -> Duration {
        Duration::milliseconds((self.required_hours * 3_600_000.0).round() as i64)
    }

    pub fn roster_path(&self) -> PathBuf {
        self.workspace.join(&self.member_list)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.workspace.join(&self.output_table)
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.workspace.join("files").join("tables")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.workspace.join("files").join("logs")
    }

    /// Human readable problems: missing required keys and unknown ones.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();

        match self.theme() {
            Ok(_) => {}
            Err(e) => issues.push(e.to_string()),
        }

        for key in self.extra.keys() {
            issues.push(format!(
                "Unknown key '{key}' (known keys: {})",
                KNOWN_KEYS.join(", ")
            ));
        }

        issues
    }

    /// Write a fresh config file and an empty roster, never touching existing files.
    ///
    /// Returns `true` when the config file was created.
    pub fn init_all(
        workspace: &Path,
        theme: Theme,
        required_hours: f64,
        new_member_grade: i64,
    ) -> AppResult<bool> {
        fs::create_dir_all(workspace)?;

        let path = Self::config_file(workspace);
        let created = if path.exists() && fs::metadata(&path)?.len() > 0 {
            false
        } else {
            let body = format!(
                "{KEY_REQUIRED_HOURS}={required_hours}\n\
                 {KEY_BACKGROUND}={}\n\
                 {KEY_NEW_MEMBER_GRADE}={new_member_grade}\n",
                theme.code()
            );
            fs::write(&path, body)?;
            true
        };

        let roster = Self::load(workspace)?.roster_path();
        if !roster.exists() {
            fs::write(&roster, "ID,Full Name,Grade\n")?;
        }

        Ok(created)
    }
}
