// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{get_headers, ledger_to_export, ledger_to_table};
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::core::ledger::Ledger;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export of the output ledger.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the ledger stored at `ledger_path`.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// A range keeps only the session columns dated inside it.
    pub fn export(
        ledger_path: &Path,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let Some(ledger) = Ledger::load(ledger_path)? else {
            warning(format!(
                "No ledger found at {}. Run a session first.",
                ledger_path.display()
            ));
            return Ok(());
        };

        let ledger = match range {
            None => ledger,
            Some(r) if r.eq_ignore_ascii_case("all") => ledger,
            Some(r) => {
                let (start, end) = parse_range(r)?;
                ledger.filter_sessions(start, end)
            }
        };

        if ledger.sessions.is_empty() {
            warning("No sessions found for the selected range.");
        }

        ensure_writable(path, force)?;

        let headers = get_headers(&ledger);
        let rows = ledger_to_table(&ledger);
        let credit_cols = 2..2 + ledger.sessions.len();

        match format {
            ExportFormat::Csv => export_csv(&headers, &rows, path)?,
            ExportFormat::Json => export_json(&ledger_to_export(&ledger), path)?,
            ExportFormat::Xlsx => export_xlsx(&headers, &rows, credit_cols, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                export_pdf(&headers, &rows, credit_cols, path, &title)?
            }
        }

        Ok(())
    }
}

/// PDF title for the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period.as_deref().filter(|p| !p.eq_ignore_ascii_case("all")) else {
        return "Attendance credits".to_string();
    };

    match p.split_once(':') {
        Some((from, to)) => format!("Attendance credits from {} to {}", from, to),
        None if p.len() == 4 => format!("Attendance credits for year {}", p),
        None => format!("Attendance credits for {}", p),
    }
}
