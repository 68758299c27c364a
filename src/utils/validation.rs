//! Input validation primitives.
//!
//! These replace verbose ok_or_else + Error::validation_invalid_argument chains.

use crate::error::{Error, Result};
use std::path::Path;

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None))
    } else {
        Ok(trimmed)
    }
}

/// Require a collection to be non-empty.
pub fn require_non_empty_vec<'a, T>(vec: &'a [T], field: &str, message: &str) -> Result<&'a [T]> {
    if vec.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None))
    } else {
        Ok(vec)
    }
}

/// Require a path to exist and be a directory.
pub fn require_dir(path: &Path, field: &str) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::validation_invalid_argument(
            field,
            format!("'{}' is not a directory", path.display()),
            Some(vec![path.display().to_string()]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_non_empty_trims_whitespace() {
        let result = require_non_empty("  hello  ", "field", "msg");
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn require_non_empty_fails_for_whitespace_only() {
        let result = require_non_empty("   ", "field", "Cannot be empty");
        assert!(result.is_err());
    }

    #[test]
    fn require_non_empty_vec_fails_for_empty() {
        let vec: Vec<i32> = vec![];
        let result = require_non_empty_vec(&vec, "field", "Cannot be empty");
        assert!(result.is_err());
    }

    #[test]
    fn require_dir_accepts_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(require_dir(dir.path(), "path").is_ok());
    }

    #[test]
    fn require_dir_rejects_missing_path() {
        let err = require_dir(Path::new("/nonexistent/pages"), "path").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.details["tried"][0], "/nonexistent/pages");
        assert!(err.details.get("id").is_none());
    }
}
