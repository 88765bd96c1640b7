//! Unified application error type.
//! All modules (config, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Roster / ledger
    // ---------------------------
    #[error("The \"Member List\" file has either been removed or renamed: {0}")]
    RosterMissing(String),

    #[error("The \"Member List\" file was improperly formatted: {0}")]
    RosterMalformed(String),

    #[error("The \"Output Table\" file was improperly formatted: {0}")]
    LedgerMalformed(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("{0} cannot be interpreted as an ID number, please try something different")]
    InvalidId(String),

    #[error("{0} not found in the Member List, please try again")]
    UnknownMember(i64),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Color present in config file not acceptable: {0}")]
    InvalidBackground(String),

    #[error("Missing required configuration value: {0}")]
    MissingConfigValue(&'static str),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors the interactive loop reports back to the user without stopping.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::InvalidId(_) | AppError::UnknownMember(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
