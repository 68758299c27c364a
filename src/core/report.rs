//! Console rendering of a `FixReport`.

use std::io::Write;

use crate::error::{Error, Result};
use crate::output::{FileStatus, FixReport, Replacement, Site};

/// Write the human-readable report: header, table warnings, one block per
/// file, and the closing summary.
pub fn render<W: Write>(report: &FixReport, out: &mut W) -> Result<()> {
    write_report(report, out).map_err(|e| {
        Error::internal_io(e.to_string(), Some("write report".to_string()))
    })
}

fn write_report<W: Write>(report: &FixReport, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "Found {} .{} files to check...",
        report.files_found, report.extension
    )?;

    for warning in &report.warnings {
        writeln!(out, "[warning] {}", warning.message)?;
    }

    for outcome in &report.outcomes {
        match outcome.status {
            FileStatus::Fixed => {
                for replacement in &outcome.replacements {
                    writeln!(out, "  {}", describe(replacement))?;
                }
                writeln!(out, "[fixed] {}", outcome.file)?;
            }
            FileStatus::Unchanged => writeln!(out, "[unchanged] {}", outcome.file)?,
            FileStatus::Error => writeln!(
                out,
                "[error] {}: {}",
                outcome.file,
                outcome.error.as_deref().unwrap_or("unknown error")
            )?,
        }
    }

    let summary = &report.summary;
    writeln!(
        out,
        "Checked {} files: {} fixed, {} unchanged, {} errors",
        summary.total, summary.fixed, summary.unchanged, summary.errors
    )
}

fn describe(replacement: &Replacement) -> String {
    let label = match replacement.site {
        Site::Declaration => "Fixed import",
        Site::Usage => "Fixed JSX usage",
    };
    format!("{}: {} -> {}", label, replacement.old, replacement.new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::FileOutcome;
    use crate::rename_table::TableWarning;

    fn render_to_string(report: &FixReport) -> String {
        let mut buf = Vec::new();
        render(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_each_outcome_kind() {
        let mut report = FixReport::new("src/pages".into(), "tsx".into(), Vec::new());
        report.files_found = 3;
        report.record(FileOutcome::fixed(
            "Dashboard.tsx".into(),
            vec![
                Replacement {
                    old: "RefreshIcon".into(),
                    new: "ArrowPathIcon".into(),
                    site: Site::Declaration,
                    count: 1,
                },
                Replacement {
                    old: "RefreshIcon".into(),
                    new: "ArrowPathIcon".into(),
                    site: Site::Usage,
                    count: 2,
                },
            ],
        ));
        report.record(FileOutcome::unchanged("Home.tsx".into()));
        report.record(FileOutcome::error(
            "Locked.tsx".into(),
            "Failed to read file: permission denied".into(),
        ));

        let text = render_to_string(&report);

        assert_eq!(
            text,
            "Found 3 .tsx files to check...\n\
             \x20 Fixed import: RefreshIcon -> ArrowPathIcon\n\
             \x20 Fixed JSX usage: RefreshIcon -> ArrowPathIcon\n\
             [fixed] Dashboard.tsx\n\
             [unchanged] Home.tsx\n\
             [error] Locked.tsx: Failed to read file: permission denied\n\
             Checked 3 files: 1 fixed, 1 unchanged, 1 errors\n"
        );
    }

    #[test]
    fn renders_table_warnings_before_files() {
        let warning = TableWarning {
            kind: "noop".into(),
            entry: "PlayIcon".into(),
            message: "'PlayIcon' maps to itself and will never change a file".into(),
        };
        let report = FixReport::new("src/pages".into(), "tsx".into(), vec![warning]);

        let text = render_to_string(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Found 0 .tsx files to check...");
        assert!(lines[1].starts_with("[warning] 'PlayIcon'"));
        assert_eq!(lines[2], "Checked 0 files: 0 fixed, 0 unchanged, 0 errors");
    }
}
