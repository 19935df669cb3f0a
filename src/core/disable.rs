//! Disable planning and execution: `<name>.cpp` -> `<name>.cpp.disabled`.
//!
//! Every candidate gets exactly one [`Outcome`]. Filesystem failures are
//! recorded on the outcome and never abort the batch.

use std::path::Path;

use crate::defaults;
use crate::error::{Error, Result};
use crate::io;

const DISABLED_CPP: &str = ".cpp.disabled";

/// Whether renames are reported or performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    DryRun,
    Apply,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::DryRun => "DRY-RUN",
            Mode::Apply => "APPLY",
        }
    }
}

/// A source file and the name it would be disabled under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dry-run: the rename would happen.
    WouldRename,
    Renamed,
    SkippedAlreadyDisabled,
    SkippedTargetExists,
    Error { message: String },
}

impl Outcome {
    pub fn is_change(&self) -> bool {
        matches!(self, Outcome::WouldRename | Outcome::Renamed)
    }

    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Outcome::SkippedAlreadyDisabled | Outcome::SkippedTargetExists
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}

/// Outcome for one candidate. `target` is `None` when no plan could be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisableItem {
    pub source: String,
    pub target: Option<String>,
    pub outcome: Outcome,
}

pub fn is_disabled(path: &str) -> bool {
    path.ends_with(DISABLED_CPP)
}

fn has_cpp_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cpp"))
}

/// Disabled name for `path`. Already-disabled paths map to themselves.
pub fn compute_target(path: &str) -> Result<String> {
    if is_disabled(path) {
        return Ok(path.to_string());
    }

    if !has_cpp_extension(path) {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("Not a .cpp file: {}", path),
            None,
        ));
    }

    Ok(format!("{}{}", path, defaults::DISABLED_SUFFIX))
}

pub fn plan(path: &str) -> Result<RenamePlan> {
    Ok(RenamePlan {
        source: path.to_string(),
        target: compute_target(path)?,
    })
}

/// Decide and, under [`Mode::Apply`], perform a single rename.
pub fn execute(plan: &RenamePlan, mode: Mode) -> Outcome {
    if is_disabled(&plan.source) {
        return Outcome::SkippedAlreadyDisabled;
    }

    let target = Path::new(&plan.target);
    if target.exists() {
        return Outcome::SkippedTargetExists;
    }

    match mode {
        Mode::DryRun => Outcome::WouldRename,
        Mode::Apply => match io::rename_file(Path::new(&plan.source), target) {
            Ok(()) => {
                log_status!("disable", "Renamed {} -> {}", plan.source, plan.target);
                Outcome::Renamed
            }
            Err(e) => {
                let message = e.details["error"]
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.describe());
                log_status!("disable", "Failed to rename {}: {}", plan.source, message);
                Outcome::Error { message }
            }
        },
    }
}

/// Plan and execute one candidate, folding planner errors into the outcome.
pub fn disable_file(path: &str, mode: Mode) -> DisableItem {
    match plan(path) {
        Ok(plan) => {
            let outcome = execute(&plan, mode);
            DisableItem {
                source: plan.source,
                target: Some(plan.target),
                outcome,
            }
        }
        Err(e) => DisableItem {
            source: path.to_string(),
            target: None,
            outcome: Outcome::Error {
                message: e.describe(),
            },
        },
    }
}
