use serde::Serialize;

/// One member's credit history across sessions.
///
/// `credits[i]` belongs to the i-th session column of the ledger; `None`
/// means the member had no record in that session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    pub id: i64,
    pub full_name: String,
    pub credits: Vec<Option<bool>>,
}

impl LedgerRow {
    pub fn new(id: i64, full_name: &str) -> Self {
        Self {
            id,
            full_name: full_name.to_string(),
            credits: Vec::new(),
        }
    }

    /// Number of sessions credited.
    pub fn credited(&self) -> usize {
        self.credits.iter().filter(|c| **c == Some(true)).count()
    }

    /// Render a cell the way the ledger file stores it.
    pub fn cell(credit: Option<bool>) -> String {
        match credit {
            Some(true) => "1".to_string(),
            Some(false) => "0".to_string(),
            None => String::new(),
        }
    }
}
