use clap::Args;

use cpp_disable::defaults;
use cpp_disable::log_reader;
use cpp_disable::pipeline::{self, Candidates};
use cpp_disable::{DisableItem, DisableOptions, DisableSummary, Mode, Outcome, Scope};

use super::CmdResult;

/// No candidate files survived filtering.
pub const EXIT_NO_CANDIDATES: i32 = 1;
/// At least one rename failed under `--apply`.
pub const EXIT_RENAME_ERRORS: i32 = 3;

#[derive(Args, Debug)]
pub struct DisableArgs {
    /// Path to the text file containing the full build/linker error log
    #[arg(value_name = "LOGFILE")]
    pub logfile: String,

    /// Which library .cpp paths to disable (micro is recommended)
    #[arg(long, default_value = defaults::DEFAULT_SCOPE, value_parser = Scope::NAMES)]
    pub scope: String,

    /// Actually rename files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Only report what would be renamed (the default)
    #[arg(long, conflicts_with = "apply")]
    pub dry_run: bool,

    /// Print per-stage path counts and in-scope paths missing on disk
    #[arg(long)]
    pub verbose: bool,
}

impl DisableArgs {
    fn options(&self) -> cpp_disable::Result<DisableOptions> {
        let mode = if self.apply && !self.dry_run {
            Mode::Apply
        } else {
            Mode::DryRun
        };

        Ok(DisableOptions {
            scope: Scope::from_str(&self.scope)?,
            mode,
            verbose: self.verbose,
        })
    }
}

pub fn run(args: DisableArgs) -> CmdResult<String> {
    let options = args.options()?;

    let log_path = log_reader::resolve_log_path(&args.logfile);
    let text = log_reader::read_log(&log_path)?;

    let candidates = pipeline::collect_candidates(&text, options.scope);

    let mut lines = Vec::new();
    if options.verbose {
        render_counts(&mut lines, &candidates, options.scope);
    }

    if candidates.is_empty() {
        lines.push("No matching existing varoa .cpp files found to disable.".to_string());
        lines.push(
            "Tip: run with --verbose and check that your log contains absolute paths.".to_string(),
        );
        return Ok((finish(lines), EXIT_NO_CANDIDATES));
    }

    render_plan(&mut lines, &options, candidates.paths.len());

    let summary = pipeline::disable_all(&candidates.paths, options.mode);
    for item in &summary.items {
        lines.push(render_item(item));
        lines.push(String::new());
    }
    render_summary(&mut lines, &summary);

    let exit_code = if summary.has_errors() {
        EXIT_RENAME_ERRORS
    } else {
        0
    };

    Ok((finish(lines), exit_code))
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_counts(lines: &mut Vec<String>, candidates: &Candidates, scope: Scope) {
    let counts = &candidates.counts;
    lines.push(format!("Found {} total .cpp path(s) in log", counts.extracted));
    lines.push(format!(
        "Found {} varoa-related .cpp path(s) in log",
        counts.library
    ));
    lines.push(format!(
        "After scope='{}', {} .cpp path(s) remain",
        scope, counts.scoped
    ));
    lines.push(format!(
        "{} file(s) exist on disk and are unique",
        counts.existing
    ));
    for path in &candidates.missing {
        lines.push(format!("  not on disk: {}", path));
    }
}

fn render_plan(lines: &mut Vec<String>, options: &DisableOptions, targets: usize) {
    lines.push("=== PLAN ===".to_string());
    lines.push(format!("Mode: {}", options.mode.as_str()));
    lines.push(format!("Scope: {}", options.scope));
    lines.push(format!("Targets: {} file(s)", targets));
    lines.push("============".to_string());
    lines.push(String::new());
}

fn render_item(item: &DisableItem) -> String {
    let target = item.target.as_deref().unwrap_or(&item.source);
    match &item.outcome {
        Outcome::WouldRename => format!(
            "DRY-RUN would rename:\n  {}\n  -> {}",
            item.source, target
        ),
        Outcome::Renamed => format!("RENAMED:\n  {}\n  -> {}", item.source, target),
        Outcome::SkippedAlreadyDisabled => format!("SKIP already disabled: {}", item.source),
        Outcome::SkippedTargetExists => format!("SKIP target exists: {}", target),
        Outcome::Error { message } => match &item.target {
            Some(target) => format!(
                "ERROR renaming {} -> {}: {}",
                item.source, target, message
            ),
            None => format!("ERROR {}: {}", item.source, message),
        },
    }
}

fn render_summary(lines: &mut Vec<String>, summary: &DisableSummary) {
    lines.push("=== SUMMARY ===".to_string());
    lines.push(format!("Changed: {}", summary.changed));
    lines.push(format!("Skipped: {}", summary.skipped));
    lines.push(format!("Errors:  {}", summary.errors));
    lines.push("===============".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(outcome: Outcome, target: Option<&str>) -> DisableItem {
        DisableItem {
            source: "/lib/micro/micro_time.cpp".to_string(),
            target: target.map(str::to_string),
            outcome,
        }
    }

    #[test]
    fn renders_would_rename_block() {
        let rendered = render_item(&item(
            Outcome::WouldRename,
            Some("/lib/micro/micro_time.cpp.disabled"),
        ));
        assert_eq!(
            rendered,
            "DRY-RUN would rename:\n  /lib/micro/micro_time.cpp\n  -> /lib/micro/micro_time.cpp.disabled"
        );
    }

    #[test]
    fn renders_target_exists_with_target_path() {
        let rendered = render_item(&item(
            Outcome::SkippedTargetExists,
            Some("/lib/micro/micro_time.cpp.disabled"),
        ));
        assert_eq!(
            rendered,
            "SKIP target exists: /lib/micro/micro_time.cpp.disabled"
        );
    }

    #[test]
    fn renders_errors_with_and_without_target() {
        let with_target = render_item(&item(
            Outcome::Error {
                message: "Permission denied (os error 13)".to_string(),
            },
            Some("/lib/micro/micro_time.cpp.disabled"),
        ));
        assert!(with_target.starts_with("ERROR renaming /lib/micro/micro_time.cpp -> "));
        assert!(with_target.ends_with(": Permission denied (os error 13)"));

        let without_target = render_item(&item(
            Outcome::Error {
                message: "Invalid argument".to_string(),
            },
            None,
        ));
        assert_eq!(
            without_target,
            "ERROR /lib/micro/micro_time.cpp: Invalid argument"
        );
    }

    #[test]
    fn plan_header_lists_mode_scope_and_targets() {
        let mut lines = Vec::new();
        let options = DisableOptions {
            scope: Scope::Tflm,
            mode: Mode::Apply,
            verbose: false,
        };
        render_plan(&mut lines, &options, 4);
        assert_eq!(
            finish(lines),
            "=== PLAN ===\nMode: APPLY\nScope: tflm\nTargets: 4 file(s)\n============\n\n"
        );
    }

    #[test]
    fn dry_run_flag_forces_dry_run_mode() {
        let args = DisableArgs {
            logfile: "errors.txt".to_string(),
            scope: "any".to_string(),
            apply: false,
            dry_run: true,
            verbose: false,
        };
        let options = args.options().unwrap();
        assert_eq!(options.mode, Mode::DryRun);
        assert_eq!(options.scope, Scope::Any);
    }

    #[test]
    fn unknown_scope_is_rejected_before_reading_log() {
        let args = DisableArgs {
            logfile: "/nonexistent/errors.txt".to_string(),
            scope: "everything".to_string(),
            apply: false,
            dry_run: false,
            verbose: false,
        };
        let err = run(args).unwrap_err();
        assert_eq!(err.code, cpp_disable::ErrorCode::ValidationInvalidArgument);
    }
}
