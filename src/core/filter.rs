//! Narrowing extracted paths down to disable candidates.

use std::path::Path;

use crate::defaults;
use crate::io;
use crate::parser;
use crate::scope::Scope;
use crate::token;

/// Keep only paths inside the inferencing library.
pub fn filter_library_paths(paths: Vec<String>) -> Vec<String> {
    paths
        .into_iter()
        .filter(|p| p.contains(defaults::LIBRARY_KEY))
        .collect()
}

/// Keep only paths matching the scope's directory needle.
///
/// Separators are normalized before matching so Windows-style paths are
/// treated the same as POSIX ones.
pub fn filter_scope(paths: Vec<String>, scope: Scope) -> Vec<String> {
    let Some(needle) = scope.needle() else {
        return paths;
    };

    paths
        .into_iter()
        .filter(|p| token::normalize_separators(p).contains(needle))
        .collect()
}

/// Result of the existence/dedup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingFiles {
    /// Unique paths that are regular files, first-seen order.
    pub files: Vec<String>,
    /// Unique paths that are absent or not regular files.
    pub missing: Vec<String>,
}

/// Deduplicate by exact string (first occurrence wins) and split by whether
/// the path is a regular file on disk right now.
pub fn unique_existing(paths: Vec<String>) -> ExistingFiles {
    let (files, missing): (Vec<String>, Vec<String>) = parser::dedupe(paths)
        .into_iter()
        .partition(|p| io::is_regular_file(Path::new(p)));

    ExistingFiles { files, missing }
}
