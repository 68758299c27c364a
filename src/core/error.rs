use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidValue,
    ConfigDuplicateKey,

    ValidationInvalidArgument,

    FileReadFailed,
    FileWriteFailed,
    DirectoryReadFailed,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidValue => "config.invalid_value",
            ErrorCode::ConfigDuplicateKey => "config.duplicate_key",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::FileReadFailed => "file.read_failed",
            ErrorCode::FileWriteFailed => "file.write_failed",
            ErrorCode::DirectoryReadFailed => "file.directory_read_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateKeyDetails {
    pub key: String,
    pub first_index: usize,
    pub duplicate_index: usize,
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
        write!(f, "{}", self.message)?;
        if let Some(error) = self.details.get("error").and_then(Value::as_str) {
            write!(f, ": {}", error)?;
        } else if let Some(problem) = self.details.get("problem").and_then(Value::as_str) {
            write!(f, ": {}", problem)?;
        }
        Ok(())
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
pub struct FileIoDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
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
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            tried,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    pub fn config_duplicate_key(key: impl Into<String>, first_index: usize, duplicate_index: usize) -> Self {
        let key = key.into();
        let details = to_details(DuplicateKeyDetails {
            key: key.clone(),
            first_index,
            duplicate_index,
        });

        Self::new(
            ErrorCode::ConfigDuplicateKey,
            format!("Rename table lists '{}' more than once", key),
            details,
        )
        .with_hint("Each old name may appear only once; drop or merge the duplicate --map entries")
    }

    pub fn file_read_failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::FileReadFailed,
            "Failed to read file",
            to_details(FileIoDetails {
                path: path.into(),
                error: error.into(),
            }),
        )
    }

    pub fn file_write_failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::FileWriteFailed,
            "Failed to write file",
            to_details(FileIoDetails {
                path: path.into(),
                error: error.into(),
            }),
        )
    }

    pub fn directory_read_failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DirectoryReadFailed,
            "Failed to list directory",
            to_details(FileIoDetails {
                path: path.into(),
                error: error.into(),
            }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_read_failed_display_includes_cause() {
        let err = Error::file_read_failed("src/pages/App.tsx", "permission denied");
        assert_eq!(err.code.as_str(), "file.read_failed");
        assert_eq!(err.to_string(), "Failed to read file: permission denied");
        assert_eq!(err.details["path"], "src/pages/App.tsx");
    }

    #[test]
    fn invalid_argument_display_includes_problem() {
        let err = Error::validation_invalid_argument("map", "Expected OLD=NEW", None);
        assert_eq!(err.to_string(), "Invalid argument: Expected OLD=NEW");
    }

    #[test]
    fn duplicate_key_carries_hint() {
        let err = Error::config_duplicate_key("RefreshIcon", 0, 3);
        assert_eq!(err.code, ErrorCode::ConfigDuplicateKey);
        assert_eq!(err.hints.len(), 1);
        assert_eq!(err.details["duplicateIndex"], 3);
    }
}
