pub type CmdResult<T> = iconfix::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod fix;
pub mod table;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_text(
    command: crate::Commands,
    global: &GlobalArgs,
) -> iconfix::Result<(String, i32)> {
    match command {
        crate::Commands::Fix(args) => fix::run_text(args, global),
        _ => Err(iconfix::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support text output",
            None,
        )),
    }
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (iconfix::Result<serde_json::Value>, i32) {
    crate::tty::status("iconfix is working...");

    match command {
        crate::Commands::Fix(args) => dispatch!(args, global, fix),
        crate::Commands::Table(args) => dispatch!(args, global, table),
    }
}
