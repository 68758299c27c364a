use clap::Args;
use serde::Serialize;

use iconfix::{RenameEntry, TableWarning};

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Rename pair OLD=NEW; repeat to inspect a custom table instead of the built-in one
    #[arg(long = "map", value_name = "OLD=NEW")]
    pub map: Vec<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum TableOutput {
    #[serde(rename = "table.show")]
    Show {
        source: String,
        entries: Vec<RenameEntry>,
        warnings: Vec<TableWarning>,
    },
}

pub fn run(args: TableArgs, _global: &GlobalArgs) -> CmdResult<TableOutput> {
    let table = super::fix::resolve_table(&args.map)?;
    let source = if args.map.is_empty() { "builtin" } else { "map" };

    Ok((
        TableOutput::Show {
            source: source.to_string(),
            entries: table.entries().to_vec(),
            warnings: table.warnings(),
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_lists_noop_warnings() {
        let (output, exit_code) = run(TableArgs { map: vec![] }, &GlobalArgs {}).unwrap();
        assert_eq!(exit_code, 0);

        let json = serde_json::to_value(output).unwrap();
        assert_eq!(json["command"], "table.show");
        assert_eq!(json["source"], "builtin");
        assert_eq!(json["entries"][0]["old"], "RefreshIcon");
        assert_eq!(json["warnings"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn custom_map_replaces_builtin() {
        let args = TableArgs {
            map: vec!["A=B".to_string()],
        };
        let (output, _) = run(args, &GlobalArgs {}).unwrap();

        let json = serde_json::to_value(output).unwrap();
        assert_eq!(json["source"], "map");
        assert_eq!(json["entries"].as_array().unwrap().len(), 1);
    }
}
