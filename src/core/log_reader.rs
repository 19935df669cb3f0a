//! Locating and loading the build/linker log.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io;

/// Expand `~`, anchor relative paths at the current directory and resolve
/// symlinks where possible.
///
/// Canonicalization fails for paths that do not exist; the absolute form is
/// returned in that case so the caller can report it.
pub fn resolve_log_path(raw: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).to_string());

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };

    std::fs::canonicalize(&absolute).unwrap_or(absolute)
}

/// Load the log as text. Invalid UTF-8 is replaced, never rejected.
pub fn read_log(path: &Path) -> Result<String> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(Error::log_not_found(display)
            .with_hint("Save the full build output to a text file and pass its path"));
    }

    log_status!("scan", "Reading {}", display);

    io::read_file_lossy(path, "read log").map_err(|e| {
        let reason = e.details["error"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| e.describe());
        Error::log_unreadable(display, reason).with_hint("Check that the path is a readable file")
    })
}
