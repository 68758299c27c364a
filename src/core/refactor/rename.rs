//! Rename engine: apply a rename table to every matching file under a root.
//!
//! Given a `FixConfig` (root, extension, table), the engine:
//! 1. Walks the tree collecting files with the configured extension
//! 2. Runs every site pattern for every table entry over each file
//! 3. Writes changed files back in place
//! 4. Records one outcome per file; failures never stop the batch

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::output::{FileOutcome, FixReport, Replacement};
use crate::rename_table::RenameTable;
use crate::utils::{io, validation};

use super::pattern::{default_patterns, SitePattern};

// ============================================================================
// Configuration
// ============================================================================

pub const DEFAULT_ROOT: &str = "src/pages";
pub const DEFAULT_EXTENSION: &str = "tsx";

/// Everything one run needs, fixed at construction.
#[derive(Debug, Clone)]
pub struct FixConfig {
    pub root: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
    pub table: RenameTable,
}

impl FixConfig {
    /// Build a config, normalizing `.tsx` to `tsx`.
    pub fn new(root: impl Into<PathBuf>, extension: &str, table: RenameTable) -> Result<Self> {
        let extension = validation::require_non_empty(extension, "ext", "Extension is empty")?;
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(Error::validation_invalid_argument(
                "ext",
                format!("'{}' is not a file extension", extension),
                None,
            ));
        }

        Ok(Self {
            root: root.into(),
            extension: extension.to_string(),
            table,
        })
    }
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            table: RenameTable::default(),
        }
    }
}

// ============================================================================
// File walking
// ============================================================================

/// Directories to always skip at any depth (dependency/VCS directories).
const ALWAYS_SKIP_DIRS: &[&str] = &["node_modules", ".git", ".svn", ".hg"];

/// Files found under a root, plus paths that could not be listed.
#[derive(Debug, Default)]
struct Discovery {
    files: Vec<PathBuf>,
    failed: Vec<(PathBuf, String)>,
}

fn walk_files(root: &Path, extension: &str) -> Discovery {
    let suffix = format!(".{}", extension);
    let mut discovery = Discovery::default();
    walk_recursive(root, &suffix, &mut discovery);
    discovery.files.sort();
    discovery.failed.sort();
    discovery
}

/// Symlinked directories are never entered; symlinked files are processed.
fn walk_recursive(dir: &Path, suffix: &str, discovery: &mut Discovery) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            discovery.failed.push((dir.to_path_buf(), e.to_string()));
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                discovery.failed.push((dir.to_path_buf(), e.to_string()));
                continue;
            }
        };

        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                discovery.failed.push((path, e.to_string()));
                continue;
            }
        };

        if file_type.is_dir() {
            let name = entry.file_name().to_string_lossy().to_string();
            if ALWAYS_SKIP_DIRS.contains(&name.as_str()) {
                continue;
            }
            walk_recursive(&path, suffix, discovery);
        } else if file_type.is_symlink() && path.is_dir() {
            continue;
        } else if entry.file_name().to_string_lossy().ends_with(suffix) {
            discovery.files.push(path);
        }
    }
}

fn relative_display(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_string_lossy().to_string(),
        _ => path.to_string_lossy().to_string(),
    }
}

// ============================================================================
// Engine
// ============================================================================

pub struct RenameEngine {
    config: FixConfig,
    patterns: Vec<Box<dyn SitePattern>>,
}

impl RenameEngine {
    pub fn new(config: FixConfig) -> Self {
        Self::with_patterns(config, default_patterns())
    }

    /// Use a custom pattern set, applied in the given order.
    pub fn with_patterns(config: FixConfig, patterns: Vec<Box<dyn SitePattern>>) -> Self {
        Self { config, patterns }
    }

    pub fn config(&self) -> &FixConfig {
        &self.config
    }

    /// Process every matching file under the root and collect outcomes.
    pub fn run(&self) -> FixReport {
        let root = &self.config.root;
        let mut report = FixReport::new(
            root.to_string_lossy().to_string(),
            self.config.extension.clone(),
            self.config.table.warnings(),
        );

        log_status!(
            "fix",
            "Scanning {} for .{} files...",
            root.display(),
            self.config.extension
        );

        let discovery = walk_files(root, &self.config.extension);
        report.files_found = discovery.files.len();

        for (path, cause) in discovery.failed {
            let display = relative_display(&path, root);
            let err = Error::directory_read_failed(&display, cause);
            log_status!("fix", "Skipping {}: {}", display, err);
            report.record(FileOutcome::error(display, err.to_string()));
        }

        for path in &discovery.files {
            let outcome = self.process_file(path);
            report.record(outcome);
        }

        log_status!(
            "fix",
            "Done: {} fixed, {} unchanged, {} errors",
            report.summary.fixed,
            report.summary.unchanged,
            report.summary.errors
        );

        report
    }

    fn process_file(&self, path: &Path) -> FileOutcome {
        let display = relative_display(path, &self.config.root);

        match self.fix_file(path, &display) {
            Ok(replacements) if replacements.is_empty() => FileOutcome::unchanged(display),
            Ok(replacements) => {
                log_status!("fix", "Fixed {} ({} pass(es))", display, replacements.len());
                FileOutcome::fixed(display, replacements)
            }
            Err(err) => {
                log_status!("fix", "Error processing {}: {}", display, err);
                FileOutcome::error(display, err.to_string())
            }
        }
    }

    /// Read, transform, and write back one file.
    ///
    /// A file is fixed when any pass changed it. Passes that cancel each
    /// other out still count, but the identical bytes are not rewritten.
    fn fix_file(&self, path: &Path, display: &str) -> Result<Vec<Replacement>> {
        let original = io::read_file(path, display)?;
        let (content, replacements) = self.transform(&original)?;

        if content != original {
            io::write_file(path, &content, display)?;
        }
        Ok(replacements)
    }

    /// Apply every table entry, in order, through every pattern.
    ///
    /// Each pair runs once; the output of one pass feeds the next.
    pub fn transform(&self, content: &str) -> Result<(String, Vec<Replacement>)> {
        let mut current = content.to_string();
        let mut replacements = Vec::new();

        for entry in self.config.table.entries() {
            if !current.contains(entry.old.as_str()) {
                continue;
            }

            for pattern in &self.patterns {
                if let Some((next, count)) = pattern.apply(&current, entry)? {
                    current = next;
                    replacements.push(Replacement {
                        old: entry.old.clone(),
                        new: entry.new.clone(),
                        site: pattern.site(),
                        count,
                    });
                }
            }
        }

        Ok((current, replacements))
    }
}

// ============================================================================
// Tests
// ============================================================================
