// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const CREDIT_YES: Color = Color::RGB(0xC6EFCE);
const CREDIT_NO: Color = Color::RGB(0xFFC7CE);

/// Export the ledger to XLSX with styling and auto-sized columns.
///
/// `credit_cols` is the half-open column range holding 0/1 session cells.
pub(crate) fn export_xlsx(
    headers: &[String],
    rows: &[Vec<String>],
    credit_cols: std::ops::Range<usize>,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Ledger").map_err(to_export_error)?;

    // ---------------------------
    // Empty ledger
    // ---------------------------
    if rows.is_empty() {
        worksheet
            .write(0, 0, "No members in the ledger")
            .map_err(to_export_error)?;
        workbook.save(path_str(path)?).map_err(to_export_error)?;
        notify_export_success("XLSX (empty ledger)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    // keep header and member columns visible while scrolling through sessions
    worksheet.set_freeze_panes(1, 2).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            let bg = if credit_cols.contains(&col) {
                match value.as_str() {
                    "1" => CREDIT_YES,
                    "0" => CREDIT_NO,
                    _ => band_color,
                }
            } else {
                band_color
            };

            write_xlsx_cell(worksheet, row, col as u16, value, bg)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write a single cell: numbers right-aligned, blanks kept styled, the rest as text.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if s.is_empty() {
        worksheet
            .write_blank(row, col, &base)
            .map_err(to_export_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
