//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole file as UTF-8 text.
///
/// Any failure (missing file, permissions, invalid UTF-8) maps to
/// `Error::file_read_failed` carrying `display` as the path.
pub fn read_file(path: &Path, display: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_read_failed(display, e.to_string()))
}

/// Overwrite a file with `content`.
pub fn write_file(path: &Path, content: &str, display: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_write_failed(display, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "temp").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.tsx"), "path.tsx");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "file.read_failed");
        assert_eq!(err.details["path"], "path.tsx");
    }

    #[test]
    fn read_file_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = read_file(temp.path(), "binary.tsx").unwrap_err();
        assert_eq!(err.code.as_str(), "file.read_failed");
    }

    #[test]
    fn write_file_overwrites_content() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "a much longer original body").unwrap();

        write_file(temp.path(), "short", "temp").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "short");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(Path::new("/nonexistent/dir/file.tsx"), "content", "file.tsx");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "file.write_failed");
    }
}
