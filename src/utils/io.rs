//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents, replacing invalid UTF-8 sequences instead of failing.
///
/// Wraps `fs::read` with consistent `Error::internal_io` formatting.
pub fn read_file_lossy(path: &Path, operation: &str) -> Result<String> {
    let bytes =
        fs::read(path).map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// True when `path` exists and is a regular file (symlinks are followed).
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Rename a file in place with standardized error handling.
pub fn rename_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("rename {} -> {}", from.display(), to.display())),
        )
    })
}
