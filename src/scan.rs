//! Directory listing for sprite sources.
//!
//! Neither function guarantees an order; callers sort before use.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File extension accepted as a sprite source. Matched case-sensitively.
pub const PNG_EXTENSION: &str = "png";

/// List the PNG files directly inside `dir`.
///
/// Subdirectories and files without a `.png` extension are skipped. A file
/// whose name equals `exclude` is skipped too, so a previous run's output is
/// not picked up as an input.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] if the directory cannot be listed.
pub fn scan_folder<P: AsRef<Path>>(dir: P, exclude: Option<&str>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    let mut files = Vec::new();
    for path in list_entries(dir)? {
        if !path.is_file() || path.extension() != Some(OsStr::new(PNG_EXTENSION)) {
            continue;
        }

        if exclude.is_some_and(|name| path.file_name() == Some(OsStr::new(name))) {
            tracing::warn!("Skipping previous output {}", path.display());
            continue;
        }

        files.push(path);
    }

    Ok(files)
}

/// List the directories directly inside `dir`.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] if the directory cannot be listed.
pub fn list_subfolders<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    Ok(list_entries(dir)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect())
}

fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let fs_error = |source| Error::Filesystem {
        path: dir.to_path_buf(),
        source,
    };

    fs::read_dir(dir)
        .map_err(fs_error)?
        .map(|entry| entry.map(|e| e.path()).map_err(fs_error))
        .collect()
}
