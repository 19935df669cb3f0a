//! Log text in, disable outcomes out.
//!
//! Stages run strictly in order: extract, library filter, scope filter,
//! existence/dedup, then one rename decision per surviving candidate.

use crate::disable::{self, Mode};
use crate::extract;
use crate::filter;
use crate::output::DisableSummary;
use crate::scope::Scope;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisableOptions {
    pub scope: Scope,
    pub mode: Mode,
    pub verbose: bool,
}

/// Path counts after each filtering stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub extracted: usize,
    pub library: usize,
    pub scoped: usize,
    pub existing: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub counts: StageCounts,
    /// Unique existing files, first-seen order.
    pub paths: Vec<String>,
    /// In-scope paths that were not regular files on disk.
    pub missing: Vec<String>,
}

impl Candidates {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Run every filtering stage over `text`.
pub fn collect_candidates(text: &str, scope: Scope) -> Candidates {
    let extracted = extract::find_cpp_paths(text);
    let extracted_count = extracted.len();

    let library = filter::filter_library_paths(extracted);
    let library_count = library.len();

    let scoped = filter::filter_scope(library, scope);
    let scoped_count = scoped.len();

    let existing = filter::unique_existing(scoped);

    log_status!(
        "scan",
        "{} .cpp path(s), {} in library, {} in scope '{}', {} on disk",
        extracted_count,
        library_count,
        scoped_count,
        scope,
        existing.files.len()
    );

    Candidates {
        counts: StageCounts {
            extracted: extracted_count,
            library: library_count,
            scoped: scoped_count,
            existing: existing.files.len(),
        },
        paths: existing.files,
        missing: existing.missing,
    }
}

/// Disable every candidate in order. Per-file failures are recorded, not raised.
pub fn disable_all(paths: &[String], mode: Mode) -> DisableSummary {
    let mut summary = DisableSummary::new();
    for path in paths {
        summary.record(disable::disable_file(path, mode));
    }
    summary
}
