//! Structured outcome records produced by the rename engine.
//!
//! The engine never prints; it fills a `FixReport` that the reporter
//! (`core::report`) or the CLI JSON envelope renders.

use serde::Serialize;

use crate::rename_table::TableWarning;

// ============================================================================
// Per-file outcomes
// ============================================================================

/// Which substitution pass produced a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    /// Bare name in a multi-line list, e.g. an import list.
    Declaration,
    /// Tag name, e.g. `<Name ...>`.
    Usage,
}

/// One pass that changed a file's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Replacement {
    pub old: String,
    pub new: String,
    pub site: Site,
    /// Number of matches rewritten by the pass.
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Fixed,
    Unchanged,
    Error,
}

/// Outcome for a single file (or an unlistable directory).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    /// Path relative to the scan root.
    pub file: String,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replacements: Vec<Replacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn fixed(file: String, replacements: Vec<Replacement>) -> Self {
        Self {
            file,
            status: FileStatus::Fixed,
            replacements,
            error: None,
        }
    }

    pub fn unchanged(file: String) -> Self {
        Self {
            file,
            status: FileStatus::Unchanged,
            replacements: Vec::new(),
            error: None,
        }
    }

    pub fn error(file: String, error: String) -> Self {
        Self {
            file,
            status: FileStatus::Error,
            replacements: Vec::new(),
            error: Some(error),
        }
    }
}

// ============================================================================
// Batch report
// ============================================================================

/// Summary counts of a fix run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixSummary {
    pub total: usize,
    pub fixed: usize,
    pub unchanged: usize,
    pub errors: usize,
}

/// Full result of one engine run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixReport {
    pub root: String,
    pub extension: String,
    /// Files matched by discovery.
    pub files_found: usize,
    pub outcomes: Vec<FileOutcome>,
    pub summary: FixSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TableWarning>,
}

impl FixReport {
    pub fn new(root: String, extension: String, warnings: Vec<TableWarning>) -> Self {
        Self {
            root,
            extension,
            files_found: 0,
            outcomes: Vec::new(),
            summary: FixSummary::default(),
            warnings,
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.summary.total += 1;
        match outcome.status {
            FileStatus::Fixed => self.summary.fixed += 1,
            FileStatus::Unchanged => self.summary.unchanged += 1,
            FileStatus::Error => self.summary.errors += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    pub fn outcome(&self, file: &str) -> Option<&FileOutcome> {
        self.outcomes.iter().find(|o| o.file == file)
    }
}
