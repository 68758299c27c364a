use clap::Args;

use iconfix::refactor::{FixConfig, RenameEngine, DEFAULT_EXTENSION, DEFAULT_ROOT};
use iconfix::{report, utils::validation, FixReport, RenameTable};

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug)]
pub struct FixArgs {
    /// Directory to scan recursively
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub path: String,

    /// File extension to process (with or without the leading dot)
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Rename pair OLD=NEW; repeat to build a table that replaces the built-in one
    #[arg(long = "map", value_name = "OLD=NEW")]
    pub map: Vec<String>,

    /// Print the report as a JSON envelope instead of text lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: FixArgs, _global: &GlobalArgs) -> CmdResult<FixReport> {
    let report = run_engine(&args)?;
    let exit_code = exit_code_for(&report);
    Ok((report, exit_code))
}

pub fn run_text(args: FixArgs, _global: &GlobalArgs) -> iconfix::Result<(String, i32)> {
    let report = run_engine(&args)?;

    let mut buf = Vec::new();
    report::render(&report, &mut buf)?;
    let text = String::from_utf8_lossy(&buf).into_owned();

    Ok((text, exit_code_for(&report)))
}

/// Validate arguments, then run the engine once.
fn run_engine(args: &FixArgs) -> iconfix::Result<FixReport> {
    let table = resolve_table(&args.map)?;
    let path = validation::require_non_empty(&args.path, "path", "Path is empty")?;
    let config = FixConfig::new(path, &args.ext, table)?;
    validation::require_dir(&config.root, "path")?;

    Ok(RenameEngine::new(config).run())
}

/// `--map` pairs replace the built-in table when given.
pub(crate) fn resolve_table(map: &[String]) -> iconfix::Result<RenameTable> {
    if map.is_empty() {
        Ok(RenameTable::heroicons())
    } else {
        RenameTable::from_pairs(map)
    }
}

/// Any per-file error makes the run exit non-zero.
fn exit_code_for(report: &FixReport) -> i32 {
    if report.has_errors() {
        1
    } else {
        0
    }
}
