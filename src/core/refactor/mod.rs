//! Icon name refactoring: rewrite incorrect names across a source tree.
//!
//! Walks source files with one extension, rewrites declaration and usage
//! sites of every rename table entry, and writes changed files back.

mod pattern;
mod rename;

pub use pattern::{default_patterns, DeclarationSite, Rewrite, SitePattern, UsageSite};
pub use rename::{FixConfig, RenameEngine, DEFAULT_EXTENSION, DEFAULT_ROOT};
