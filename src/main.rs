use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseMode {
    Json,
    Text,
}

mod commands;
mod output;
mod tty;

use commands::{fix, table};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "iconfix")]
#[command(version = VERSION)]
#[command(about = "Fix incorrect icon component names across a source tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite incorrect icon names in matching files
    Fix(fix::FixArgs),
    /// Show the active rename table and its warnings
    Table(table::TableArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Fix(args) if !args.json => ResponseMode::Text,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    if response_mode(&cli.command) == ResponseMode::Text {
        return match commands::run_text(cli.command, &global) {
            Ok((content, exit_code)) => {
                print!("{}", content);
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                let exit_code = output::exit_code_for_error(err.code);
                let _ = output::print_result::<serde_json::Value>(Err(err));
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        };
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    let _ = output::print_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
