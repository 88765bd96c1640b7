// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::ops::Range;
use std::path::Path;

/// Past this many columns the table no longer fits a portrait page.
const LANDSCAPE_FROM_COLUMNS: usize = 8;

pub(crate) fn export_pdf(
    headers: &[String],
    rows: &[Vec<String>],
    credit_cols: Range<usize>,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new(headers.len() >= LANDSCAPE_FROM_COLUMNS);
    pdf.write_table(title, headers, rows, credit_cols);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
