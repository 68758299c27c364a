//! Rename table: ordered old → new identifier pairs.
//!
//! The table is built once (from the built-in icon set or from `OLD=NEW`
//! flags), validated, and then shared read-only by the engine.

use crate::error::{Error, Result};
use crate::utils::validation;
use serde::Serialize;
use std::collections::HashMap;

/// Built-in icon corrections, applied in this order.
const HEROICONS: &[(&str, &str)] = &[
    ("RefreshIcon", "ArrowPathIcon"),
    ("TargetIcon", "AdjustmentsHorizontalIcon"),
    ("TrendingUpIcon", "ArrowTrendingUpIcon"),
    ("PillsIcon", "BeakerIcon"),
    ("DownloadIcon", "ArrowDownTrayIcon"),
    ("BrainIcon", "CpuChipIcon"),
    ("PlayIcon", "PlayIcon"),
    ("StopIcon", "StopIcon"),
];

/// Characters that would make a name ambiguous inside the site patterns
/// or inside an `OLD=NEW` flag.
const FORBIDDEN_CHARS: &[char] = &['<', '>', ',', '='];

/// A single old → new pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub old: String,
    pub new: String,
}

impl RenameEntry {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// True when applying this entry can never change content.
    pub fn is_noop(&self) -> bool {
        self.old == self.new
    }
}

/// Something legal but suspicious in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableWarning {
    /// Warning category: `noop` or `chain`.
    pub kind: String,
    /// The `old` name of the entry the warning is about.
    pub entry: String,
    pub message: String,
}

/// Ordered, validated rename table with unique `old` keys.
#[derive(Debug, Clone, Serialize)]
pub struct RenameTable {
    entries: Vec<RenameEntry>,
}

impl RenameTable {
    /// Build a table, rejecting empty or malformed names and duplicate keys.
    pub fn new(entries: Vec<RenameEntry>) -> Result<Self> {
        validation::require_non_empty_vec(&entries, "map", "Rename table has no entries")?;

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            validate_name(&entry.old, "old")?;
            validate_name(&entry.new, "new")?;

            if let Some(&first) = seen.get(entry.old.as_str()) {
                return Err(Error::config_duplicate_key(&entry.old, first, index));
            }
            seen.insert(entry.old.as_str(), index);
        }

        Ok(Self { entries })
    }

    /// The built-in icon correction table.
    pub fn heroicons() -> Self {
        Self {
            entries: HEROICONS
                .iter()
                .map(|(old, new)| RenameEntry::new(*old, *new))
                .collect(),
        }
    }

    /// Parse `OLD=NEW` pairs, keeping their order.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        let entries = pairs
            .iter()
            .map(|pair| parse_pair(pair.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report no-op entries and chains.
    ///
    /// A chain whose `new` matches an *earlier* key breaks idempotence: the
    /// second run rewrites what the first run produced.
    pub fn warnings(&self) -> Vec<TableWarning> {
        let mut warnings = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.is_noop() {
                warnings.push(TableWarning {
                    kind: "noop".to_string(),
                    entry: entry.old.clone(),
                    message: format!("'{}' maps to itself and will never change a file", entry.old),
                });
                continue;
            }

            let Some(target) = self.entries.iter().position(|e| e.old == entry.new) else {
                continue;
            };

            let message = if target < index {
                format!(
                    "'{}' -> '{}' produces a name that an earlier entry renames again; a second run will not be a no-op",
                    entry.old, entry.new
                )
            } else {
                format!(
                    "'{}' -> '{}' produces a name that a later entry renames to '{}'",
                    entry.old, entry.new, self.entries[target].new
                )
            };

            warnings.push(TableWarning {
                kind: "chain".to_string(),
                entry: entry.old.clone(),
                message,
            });
        }

        warnings
    }
}

impl Default for RenameTable {
    fn default() -> Self {
        Self::heroicons()
    }
}

fn parse_pair(pair: &str) -> Result<RenameEntry> {
    let Some((old, new)) = pair.split_once('=') else {
        return Err(Error::validation_invalid_argument(
            "map",
            format!("Expected OLD=NEW, got '{}'", pair),
            None,
        ));
    };

    let old = validation::require_non_empty(old, "map", "Old name is empty")?;
    let new = validation::require_non_empty(new, "map", "New name is empty")?;
    Ok(RenameEntry::new(old, new))
}

fn validate_name(name: &str, field: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::config_invalid_value(field, None, "Name is empty"));
    }

    if name.chars().any(|c| c.is_whitespace() || FORBIDDEN_CHARS.contains(&c)) {
        return Err(Error::config_invalid_value(
            field,
            Some(name.to_string()),
            "Name must not contain whitespace or any of < > , =",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heroicons_table_keeps_order() {
        let table = RenameTable::heroicons();
        assert_eq!(table.len(), 8);
        assert_eq!(table.entries()[0], RenameEntry::new("RefreshIcon", "ArrowPathIcon"));
        assert_eq!(table.entries()[5], RenameEntry::new("BrainIcon", "CpuChipIcon"));
        assert_eq!(table.entries()[7].old, "StopIcon");
    }

    #[test]
    fn heroicons_table_passes_validation() {
        let table = RenameTable::heroicons();
        assert!(RenameTable::new(table.entries().to_vec()).is_ok());
    }

    #[test]
    fn heroicons_table_warns_only_about_noops() {
        let warnings = RenameTable::heroicons().warnings();
        let entries: Vec<&str> = warnings.iter().map(|w| w.entry.as_str()).collect();
        assert_eq!(entries, vec!["PlayIcon", "StopIcon"]);
        assert!(warnings.iter().all(|w| w.kind == "noop"));
    }

    #[test]
    fn from_pairs_parses_in_order() {
        let table = RenameTable::from_pairs(&["B=C", " A = Z "]).unwrap();
        assert_eq!(
            table.entries(),
            &[RenameEntry::new("B", "C"), RenameEntry::new("A", "Z")]
        );
    }

    #[test]
    fn from_pairs_rejects_missing_separator() {
        let err = RenameTable::from_pairs(&["RefreshIcon"]).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn from_pairs_rejects_empty_side() {
        assert!(RenameTable::from_pairs(&["=ArrowPathIcon"]).is_err());
        assert!(RenameTable::from_pairs(&["RefreshIcon="]).is_err());
    }

    #[test]
    fn from_pairs_rejects_duplicate_keys() {
        let err = RenameTable::from_pairs(&["A=B", "C=D", "A=E"]).unwrap_err();
        assert_eq!(err.code.as_str(), "config.duplicate_key");
        assert_eq!(err.details["firstIndex"], 0);
        assert_eq!(err.details["duplicateIndex"], 2);
    }

    #[test]
    fn new_rejects_empty_table() {
        assert!(RenameTable::new(vec![]).is_err());
    }

    #[test]
    fn new_rejects_tag_characters() {
        let err = RenameTable::new(vec![RenameEntry::new("<Icon", "Icon")]).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }

    #[test]
    fn warnings_flag_backward_chain() {
        let table = RenameTable::from_pairs(&["B=C", "A=B"]).unwrap();
        let warnings = table.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, "chain");
        assert_eq!(warnings[0].entry, "A");
        assert!(warnings[0].message.contains("second run"));
    }

    #[test]
    fn warnings_flag_forward_chain() {
        let table = RenameTable::from_pairs(&["A=B", "B=C"]).unwrap();
        let warnings = table.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("later entry renames to 'C'"));
    }
}
