//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("shipledger")
        .about("Shipment records over an in-memory ledger")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Executor config file (default: built-in settings)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Render getAll/getHist payloads as strict JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more to stderr (repeatable)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .help("Log level, overrides -v")
                .global(true),
        )
        .subcommand(build_invoke())
        .subcommand(Command::new("config").about("Print the default configuration file"))
}

fn build_invoke() -> Command {
    Command::new("invoke")
        .about("Run one invocation against a fresh ledger")
        .arg(
            Arg::new("function")
                .required(true)
                .help("set | edit | get | getAll | getHist"),
        )
        .arg(
            Arg::new("args")
                .num_args(0..)
                .allow_hyphen_values(true)
                .help("Positional arguments"),
        )
}
