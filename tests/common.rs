#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rtattendance::config::Config;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn rta() -> Command {
    cargo_bin_cmd!("rtattendance")
}

/// `rta --dir <workspace> <args...>`
pub fn rta_in(workspace: &Path) -> Command {
    let mut cmd = rta();
    cmd.arg("--dir").arg(workspace);
    cmd
}

/// Fresh temporary workspace; removed when the guard drops.
pub fn workspace() -> TempDir {
    tempfile::tempdir().expect("create temp workspace")
}

pub fn write_config(dir: &Path, body: &str) {
    fs::write(dir.join("config.cfg"), body).expect("write config");
}

pub fn write_roster(dir: &Path, rows: &[(i64, &str, i64)]) {
    let mut body = String::from("ID,Full Name,Grade\n");
    for (id, name, grade) in rows {
        body.push_str(&format!("{id},{name},{grade}\n"));
    }
    fs::write(dir.join("Member List.csv"), body).expect("write roster");
}

/// Workspace with a dark theme, the given threshold and the two-member roster
/// used throughout the tests.
pub fn ready_workspace(required_hours: &str) -> TempDir {
    let ws = workspace();
    write_config(
        ws.path(),
        &format!("requiredHours={required_hours}\nbackgroundColor=dark\n"),
    );
    write_roster(ws.path(), &[(1, "Alice Smith", 9), (2, "Bob Jones", 12)]);
    ws
}

pub fn load_config(dir: &Path) -> Config {
    Config::load(dir).expect("load config")
}

/// Local timestamp on a fixed day, to the second.
pub fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 9, 15, h, m, s)
        .single()
        .expect("unambiguous local time")
}
