//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use iconfix::error::Hint;
use iconfix::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
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

pub fn print_result<T: Serialize>(result: Result<T>) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidValue
        | ErrorCode::ConfigDuplicateKey
        | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::FileReadFailed
        | ErrorCode::FileWriteFailed
        | ErrorCode::DirectoryReadFailed
        | ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_code_and_hints() {
        let err = Error::config_duplicate_key("RefreshIcon", 0, 1);
        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"code\": \"config.duplicate_key\""));
        assert!(json.contains("\"hints\""));
        assert!(!json.contains("\"data\""));
        assert!(!json.contains("retryable"));
    }

    #[test]
    fn success_envelope_wraps_data() {
        let json = CliResponse::success(serde_json::json!({ "fixed": 2 }))
            .to_json()
            .unwrap();
        assert!(json.contains("\"success\": true"));
        assert!(json.contains("\"fixed\": 2"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn validation_errors_map_to_exit_code_2() {
        let err = Error::validation_invalid_argument("map", "Expected OLD=NEW", None);
        let (value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert!(value.is_err());
        assert_eq!(exit_code, 2);
    }

    #[test]
    fn command_exit_code_passes_through() {
        let (value, exit_code) = map_cmd_result_to_json(Ok((serde_json::json!([]), 1)));
        assert!(value.is_ok());
        assert_eq!(exit_code, 1);
    }
}
