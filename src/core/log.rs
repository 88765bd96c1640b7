use crate::errors::AppResult;
use crate::utils::path::dated_files;
use crate::utils::time::format_timestamp;
use ansi_term::Colour;
use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only text log of one session. Every line is written as it happens.
pub struct SessionLog {
    path: PathBuf,
    file: File,
}

impl SessionLog {
    /// Open (append) the log at a path reserved by the caller.
    pub fn create(path: PathBuf) -> AppResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_at(
        &mut self,
        at: DateTime<Local>,
        operation: &str,
        target: &str,
        message: &str,
    ) -> AppResult<()> {
        writeln!(self.file, "{}", format_line(at, operation, target, message))?;
        self.file.flush()?;
        Ok(())
    }
}

/// `[<timestamp>] <operation> <target> | <message>`; the target may be empty.
pub fn format_line(at: DateTime<Local>, operation: &str, target: &str, message: &str) -> String {
    let op_target = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} {target}")
    };
    format!("[{}] {op_target} | {message}", format_timestamp(&at))
}

/// A parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn parse_line(re: &Regex, line: &str) -> Option<LogEntry> {
    let caps = re.captures(line)?;
    Some(LogEntry {
        timestamp: caps.get(1)?.as_str().to_string(),
        operation: caps.get(2)?.as_str().to_string(),
        target: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
        message: caps.get(4)?.as_str().to_string(),
    })
}

fn line_regex() -> Regex {
    Regex::new(r"^\[([^\]]+)\] (\S+)(?: (\S+))? \| (.*)$").expect("static log line pattern")
}

/// ANSI colour for each operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "in" => Colour::Green,
        "out" => Colour::Red,
        "start" => Colour::Blue,
        "end" => Colour::Purple,
        "save" => Colour::Yellow,
        _ => Colour::White,
    }
}

/// Log files written on `date`, in creation order.
pub fn log_files_for(logs_dir: &Path, date: NaiveDate) -> AppResult<Vec<PathBuf>> {
    Ok(dated_files(logs_dir, date, "txt")?)
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path)?;
        let re = line_regex();

        let entries: Vec<LogEntry> = content.lines().filter_map(|l| parse_line(&re, l)).collect();

        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 1)
            .max()
            .unwrap_or(10);
        let date_w = entries.iter().map(|e| e.timestamp.len()).max().unwrap_or(0);

        println!("📜 Session log {}:\n", path.display());

        for (i, entry) in entries.iter().enumerate() {
            let color = color_for_operation(&entry.operation);

            let mut op_target = color.paint(entry.operation.as_str()).to_string();
            let mut visible = entry.operation.len();
            if !entry.target.is_empty() {
                op_target.push(' ');
                op_target.push_str(&entry.target);
                visible += entry.target.len() + 1;
            }

            let padding = " ".repeat(op_w.saturating_sub(visible));

            println!(
                "{:>3}: {:<date_w$} | {}{} => {}",
                i + 1,
                entry.timestamp,
                op_target,
                padding,
                entry.message,
                date_w = date_w
            );
        }

        Ok(())
    }
}
