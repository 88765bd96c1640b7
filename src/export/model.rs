// src/export/model.rs

use crate::core::ledger::Ledger;
use serde::Serialize;
use std::collections::BTreeMap;

pub(crate) const CREDITED_HEADER: &str = "Credited";

/// One member's ledger history, shaped for JSON.
#[derive(Serialize, Clone, Debug)]
pub struct MemberCreditExport {
    pub id: i64,
    pub full_name: String,
    /// Session column → 1/0, or null when the member was absent.
    pub credits: BTreeMap<String, Option<u8>>,
    pub credited: usize,
}

/// Header for CSV / XLSX / PDF: the ledger columns plus a total.
pub(crate) fn get_headers(ledger: &Ledger) -> Vec<String> {
    let mut headers = ledger.headers();
    headers.push(CREDITED_HEADER.to_string());
    headers
}

/// Ledger rows as strings, total appended.
pub(crate) fn ledger_to_table(ledger: &Ledger) -> Vec<Vec<String>> {
    ledger
        .to_table()
        .into_iter()
        .zip(&ledger.rows)
        .map(|(mut cells, row)| {
            cells.push(row.credited().to_string());
            cells
        })
        .collect()
}

pub(crate) fn ledger_to_export(ledger: &Ledger) -> Vec<MemberCreditExport> {
    ledger
        .rows
        .iter()
        .map(|row| MemberCreditExport {
            id: row.id,
            full_name: row.full_name.clone(),
            credits: ledger
                .sessions
                .iter()
                .cloned()
                .zip(row.credits.iter().map(|c| c.map(u8::from)))
                .collect(),
            credited: row.credited(),
        })
        .collect()
}
