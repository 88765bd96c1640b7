//! Path utilities: expand ~, build dated output directories, pick collision-free names.

use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Return `desired` if it is not taken, otherwise the first free
/// `"desired (n)"` with n counting up from 1.
pub fn unique_name<S: AsRef<str>>(desired: &str, existing: &[S]) -> String {
    let taken = |name: &str| existing.iter().any(|e| e.as_ref() == name);

    if !taken(desired) {
        return desired.to_string();
    }

    let mut n = 1;
    loop {
        let candidate = format!("{desired} ({n})");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// `base_dir/<unique stem>.<ext>`, where `existing` lists the stems already in use.
/// Pure: the caller decides where the list of existing names comes from.
pub fn unique_path<S: AsRef<str>>(
    base_dir: &Path,
    desired: &str,
    ext: &str,
    existing: &[S],
) -> PathBuf {
    base_dir.join(format!("{}.{ext}", unique_name(desired, existing)))
}

/// `base/<year>/<Month name>` for the given date.
pub fn dated_dir(base: &Path, date: NaiveDate) -> PathBuf {
    base.join(date.format("%Y").to_string())
        .join(date.format("%B").to_string())
}

/// Stems of the files in `dir` carrying extension `ext`. A missing directory has none.
pub fn existing_stems(dir: &Path, ext: &str) -> io::Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stems = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == ext)
            && let Some(stem) = path.file_stem()
        {
            stems.push(stem.to_string_lossy().to_string());
        }
    }
    Ok(stems)
}

/// Create `dated_dir(base, date)` and reserve a unique `<day>.<ext>` path in it.
pub fn next_dated_file(base: &Path, date: NaiveDate, ext: &str) -> io::Result<PathBuf> {
    let dir = dated_dir(base, date);
    fs::create_dir_all(&dir)?;

    let existing = existing_stems(&dir, ext)?;
    let day = date.format("%-d").to_string();
    Ok(unique_path(&dir, &day, ext, &existing))
}

/// One `<day>[ (n)]` stem that is free in every `(base, ext)` target at once,
/// so files written for the same session share a name.
pub fn next_dated_stem(date: NaiveDate, targets: &[(&Path, &str)]) -> io::Result<String> {
    let mut existing = Vec::new();
    for (base, ext) in targets {
        let dir = dated_dir(base, date);
        fs::create_dir_all(&dir)?;
        existing.extend(existing_stems(&dir, ext)?);
    }

    let day = date.format("%-d").to_string();
    Ok(unique_name(&day, &existing))
}

/// Files written by [`next_dated_file`] for `date`, in creation order
/// (`15`, `15 (1)`, `15 (2)`, ...).
pub fn dated_files(base: &Path, date: NaiveDate, ext: &str) -> io::Result<Vec<PathBuf>> {
    let dir = dated_dir(base, date);
    let day = date.format("%-d").to_string();
    let prefix = format!("{day} (");

    let mut stems: Vec<(u32, String)> = existing_stems(&dir, ext)?
        .into_iter()
        .filter_map(|s| {
            if s == day {
                Some((0, s))
            } else {
                let n = s.strip_prefix(&prefix)?.strip_suffix(')')?.parse().ok()?;
                Some((n, s))
            }
        })
        .collect();
    stems.sort();

    Ok(stems
        .into_iter()
        .map(|(_, s)| dir.join(format!("{s}.{ext}")))
        .collect())
}
