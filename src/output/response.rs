//! CLI response printing and exit code mapping.
//!
//! Reports go to stdout as plain text; fatal errors go to stderr.

use cpp_disable::{Error, ErrorCode, Result};

/// Writing the report failed. Kept apart from 1 (no candidates) and 3
/// (rename errors).
pub const EXIT_INTERNAL_IO: i32 = 4;

fn write_stdout(content: &str) -> Result<()> {
    use std::io::{self, Write};

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = handle.write_all(content.as_bytes()).and_then(|_| handle.flush()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

/// Render an error for stderr: `ERROR: <message>: <detail>` plus hint lines.
pub fn format_error(err: &Error) -> String {
    let mut out = format!("ERROR: {}\n", err.describe());
    for hint in &err.hints {
        out.push_str(&format!("Hint: {}\n", hint.message));
    }
    out
}

pub fn print_error(err: &Error) {
    eprint!("{}", format_error(err));
}

/// Print a command's text result and return the process exit code.
pub fn print_text_result(result: Result<(String, i32)>) -> i32 {
    match result {
        Ok((content, exit_code)) => match write_stdout(&content) {
            Ok(()) => exit_code,
            Err(err) => {
                print_error(&err);
                exit_code_for_error(err.code)
            }
        },
        Err(err) => {
            print_error(&err);
            exit_code_for_error(err.code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument | ErrorCode::LogNotFound | ErrorCode::LogUnreadable => {
            2
        }

        ErrorCode::InternalIoError => EXIT_INTERNAL_IO,
    }
}
