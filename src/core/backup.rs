use crate::config::{CONFIG_FILE_NAME, Config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Archive format, picked from the destination file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".zip") {
            Some(ArchiveKind::Zip)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(ArchiveKind::TarGz)
        } else {
            None
        }
    }
}

pub struct BackupLogic;

impl BackupLogic {
    /// Archive config, roster, ledger and the `files/` tree of the workspace.
    ///
    /// Returns the list of archived entries (relative to the workspace).
    pub fn backup(cfg: &Config, dest_file: &str, force: bool) -> AppResult<Vec<String>> {
        let dest = Path::new(dest_file);
        let kind = ArchiveKind::from_path(dest).ok_or_else(|| {
            AppError::Backup(format!(
                "unsupported archive name '{dest_file}': use .zip, .tar.gz or .tgz"
            ))
        })?;

        if dest.exists() && !force {
            return Err(AppError::Backup(format!(
                "'{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = collect_entries(cfg)?;
        if entries.is_empty() {
            warning("Nothing to back up: the workspace holds no data yet.");
            return Ok(Vec::new());
        }

        match kind {
            ArchiveKind::Zip => write_zip(&cfg.workspace, &entries, dest)?,
            ArchiveKind::TarGz => write_tar_gz(&cfg.workspace, &entries, dest)?,
        }

        success(format!("Backup created: {}", dest.display()));

        Ok(entries
            .iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect())
    }
}

/// Relative paths of every file worth keeping, in a stable order.
fn collect_entries(cfg: &Config) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for name in [
        CONFIG_FILE_NAME,
        cfg.member_list.as_str(),
        cfg.output_table.as_str(),
    ] {
        if cfg.workspace.join(name).is_file() {
            entries.push(PathBuf::from(name));
        }
    }

    let files = cfg.workspace.join("files");
    if files.is_dir() {
        walk(&cfg.workspace, &files, &mut entries)?;
    }

    Ok(entries)
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut children: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    children.sort();

    for path in children {
        if path.is_dir() {
            walk(root, &path, out)?;
        } else if let Ok(rel) = path.strip_prefix(root) {
            out.push(rel.to_path_buf());
        }
    }
    Ok(())
}

fn write_zip(root: &Path, entries: &[PathBuf], dest: &Path) -> AppResult<()> {
    let file = fs::File::create(dest)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for rel in entries {
        // zip entry names always use forward slashes
        let name = rel.to_string_lossy().replace('\\', "/");
        zip.start_file(name, options)
            .map_err(|e| AppError::Backup(e.to_string()))?;

        let mut f = fs::File::open(root.join(rel))?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;
    Ok(())
}

fn write_tar_gz(root: &Path, entries: &[PathBuf], dest: &Path) -> AppResult<()> {
    let file = fs::File::create(dest)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for rel in entries {
        builder.append_path_with_name(root.join(rel), rel)?;
    }

    let mut encoder = builder.into_inner()?;
    encoder.flush()?;
    encoder.finish()?;
    Ok(())
}
