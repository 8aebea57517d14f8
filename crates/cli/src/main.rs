//! shipledger CLI: drive the shipment ledger from the command line.
//!
//! Two modes:
//! - **Shell mode**: `shipledger [flags] invoke FUNCTION ARGS...`: single invocation, exit
//! - **Pipe mode**: `shipledger [flags] < invocations.jsonl`: line-by-line from stdin
//!
//! Both run against an in-memory ledger that lives as long as the process.

mod commands;
mod pipe;

use std::path::Path;
use std::process;
use std::sync::Arc;

use shipledger_executor::{Executor, ExecutorConfig, Response, ResponseFormat};
use shipledger_storage::MemoryLedger;
use tracing::Level;

use commands::build_cli;

fn main() {
    let matches = build_cli().get_matches();
    init_logging(&matches);

    if matches.subcommand_name() == Some("config") {
        print!("{}", ExecutorConfig::default_toml());
        return;
    }

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let executor = Executor::with_config(Arc::new(MemoryLedger::new()), config);

    let exit_code = match matches.subcommand() {
        Some(("invoke", sub)) => run_shell_mode(&executor, sub),
        _ => {
            let stdin = std::io::stdin();
            match pipe::run_pipe(&executor, stdin.lock(), std::io::stdout().lock()) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("{}", e);
                    1
                }
            }
        }
    };
    process::exit(exit_code);
}

fn init_logging(matches: &clap::ArgMatches) {
    let level = match matches.get_one::<String>("log-level").map(String::as_str) {
        Some("error") => Level::ERROR,
        Some("warn") => Level::WARN,
        Some("info") => Level::INFO,
        Some("debug") => Level::DEBUG,
        Some(_) => Level::TRACE,
        None => match matches.get_count("verbose") {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        },
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(matches: &clap::ArgMatches) -> Result<ExecutorConfig, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ExecutorConfig::from_file(Path::new(path)).map_err(|e| e.to_string())?,
        None => ExecutorConfig::default(),
    };
    if matches.get_flag("json") {
        config.response_format = ResponseFormat::Json;
    }
    Ok(config)
}

fn run_shell_mode(executor: &Executor<MemoryLedger>, matches: &clap::ArgMatches) -> i32 {
    let function = matches
        .get_one::<String>("function")
        .map(String::as_str)
        .unwrap_or_default();
    let args: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    match executor.invoke(function, args) {
        Response::Success { payload } => {
            if !payload.is_empty() {
                println!("{}", String::from_utf8_lossy(&payload));
            }
            0
        }
        Response::Error { message } => {
            eprintln!("(error) {}", message);
            1
        }
    }
}
