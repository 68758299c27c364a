// Public modules
pub mod error;
pub mod output;
pub mod refactor;
pub mod rename_table;
pub mod report;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{FileOutcome, FileStatus, FixReport, FixSummary, Replacement, Site};
pub use rename_table::{RenameEntry, RenameTable, TableWarning};
