//! Formatting utilities used for CLI and export outputs.

/// Fractional hours as `02h 25m`.
pub fn hours2readable(hours: f64) -> String {
    let total_mins = (hours * 60.0).round().max(0.0) as i64;
    format!("{:02}h {:02}m", total_mins / 60, total_mins % 60)
}

/// Credit cell for terminal output: `yes`, `no` or `-` for absent.
pub fn describe_credit(credit: Option<bool>) -> &'static str {
    match credit {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}
