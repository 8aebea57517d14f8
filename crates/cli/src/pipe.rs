//! Pipe mode: one invocation per input line, all sharing one ledger.
//!
//! Each line is a JSON envelope (`{"Args":["get","ship1"]}`) or a JSON array
//! of strings. Blank lines and `#` comments are skipped.

use std::io::{self, BufRead, Write};

use shipledger_executor::{Executor, Invocation, Response};
use shipledger_storage::MemoryLedger;

/// Format a response as a single output line (`OK <payload>` / `ERR <message>`)
pub fn format_line(response: &Response) -> String {
    match response {
        Response::Success { payload } => {
            if payload.is_empty() {
                "OK".to_string()
            } else {
                format!("OK {}", String::from_utf8_lossy(payload))
            }
        }
        Response::Error { message } => format!("ERR {}", message),
    }
}

/// Run every line of `input`, writing one response line per invocation.
///
/// Returns the process exit code: 1 if any line failed, 0 otherwise.
pub fn run_pipe<R: BufRead, W: Write>(
    executor: &Executor<MemoryLedger>,
    input: R,
    mut output: W,
) -> io::Result<i32> {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let response = match Invocation::parse_json(trimmed) {
            Ok(invocation) => executor.invoke_invocation(invocation),
            Err(e) => Response::error(e.to_string()),
        };
        if !response.is_success() {
            exit_code = 1;
        }
        writeln!(output, "{}", format_line(&response))?;
    }

    output.flush()?;
    Ok(exit_code)
}
