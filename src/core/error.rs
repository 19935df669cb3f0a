use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    LogNotFound,
    LogUnreadable,

    InternalIoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::LogNotFound => "log.not_found",
            ErrorCode::LogUnreadable => "log.unreadable",

            ErrorCode::InternalIoError => "internal.io_error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFileDetails {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        tried: Option<Vec<String>>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            tried,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn log_not_found(path: impl Into<String>) -> Self {
        let details = serde_json::to_value(LogFileDetails {
            path: path.into(),
            error: None,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::LogNotFound, "logfile does not exist", details)
    }

    pub fn log_unreadable(path: impl Into<String>, error: impl Into<String>) -> Self {
        let details = serde_json::to_value(LogFileDetails {
            path: path.into(),
            error: Some(error.into()),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::LogUnreadable, "logfile cannot be read", details)
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }

    /// One-line description for terminal output: message, then the subject
    /// (path or problem) with the underlying error in parentheses.
    pub fn describe(&self) -> String {
        let subject = self
            .detail_str("path")
            .or_else(|| self.detail_str("problem"));

        match (subject, self.detail_str("error")) {
            (Some(subject), Some(error)) => format!("{}: {} ({})", self.message, subject, error),
            (Some(detail), None) | (None, Some(detail)) => format!("{}: {}", self.message, detail),
            (None, None) => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_not_found_carries_path_detail() {
        let err = Error::log_not_found("/tmp/missing.txt");
        assert_eq!(err.code.as_str(), "log.not_found");
        assert_eq!(err.details["path"], "/tmp/missing.txt");
        assert!(err.details.get("error").is_none());
    }

    #[test]
    fn invalid_argument_skips_empty_tried() {
        let err = Error::validation_invalid_argument("scope", "Unknown scope 'all'", None);
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
        assert_eq!(err.details["field"], "scope");
        assert!(err.details.get("tried").is_none());
    }

    #[test]
    fn describe_shows_path_and_underlying_error() {
        let err = Error::log_unreadable("/var/log/build.txt", "Permission denied");
        assert_eq!(
            err.describe(),
            "logfile cannot be read: /var/log/build.txt (Permission denied)"
        );
    }

    #[test]
    fn describe_shows_path_alone_when_no_error() {
        let err = Error::log_not_found("/var/log/build.txt");
        assert_eq!(err.describe(), "logfile does not exist: /var/log/build.txt");
    }

    #[test]
    fn describe_uses_error_when_no_subject() {
        let err = Error::internal_io("Broken pipe", Some("write stdout".to_string()));
        assert_eq!(err.describe(), "IO error: Broken pipe");
    }

    #[test]
    fn describe_falls_back_to_message() {
        let err = Error::new(ErrorCode::InternalIoError, "boom", Value::Null);
        assert_eq!(err.describe(), "boom");
    }

    #[test]
    fn with_hint_appends() {
        let err = Error::log_not_found("x").with_hint("Check the path");
        assert_eq!(err.hints.len(), 1);
        assert_eq!(err.hints[0].message, "Check the path");
    }
}
