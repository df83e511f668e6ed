//! Response envelope encoding.
//!
//! Success: `{"ok":<raw result>}` on stdout, exit 0. The result is compacted
//! to one line but otherwise left as the provider wrote it.
//! Failure: `{"error":"error running <command>: <message>"}` on stderr, exit 1.

use std::io::Write;

use serde::Serialize;
use serde_json::value::RawValue;

use super::error::CommandError;
use crate::exitcode;

#[derive(Serialize)]
struct Success {
    ok: Box<RawValue>,
}

#[derive(Serialize)]
struct Failure {
    error: String,
}

/// Wrap a raw JSON result as `{"ok": ...}` without re-serializing it.
///
/// Key order, number spelling and string escapes are kept as received.
pub fn encode_success(result: &[u8]) -> Result<String, CommandError> {
    let text =
        std::str::from_utf8(result).map_err(|e| CommandError::InvalidResult(e.to_string()))?;
    let raw: &RawValue =
        serde_json::from_str(text).map_err(|e| CommandError::InvalidResult(e.to_string()))?;
    let ok = RawValue::from_string(compact(raw.get()))
        .map_err(|e| CommandError::InvalidResult(e.to_string()))?;

    Ok(serde_json::to_string(&Success { ok })?)
}

/// Drop whitespace between tokens of an already validated JSON document.
fn compact(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in json.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            ' ' | '\t' | '\n' | '\r' => {}
            '"' => {
                in_string = true;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

/// Wrap an error as `{"error": "error running <command>: <message>"}`.
pub fn encode_failure(command: &str, error: &CommandError) -> String {
    let failure = Failure {
        error: format!("error running {}: {}", command, error),
    };
    // A struct of one string always serializes; the fallback keeps output non-empty.
    serde_json::to_string(&failure).unwrap_or_else(|_| {
        format!("{{\"error\":\"error running {}\"}}", command.escape_default())
    })
}

/// Print exactly one envelope for `result` and return the process exit code.
///
/// Write failures are ignored; there is nowhere left to report them.
pub fn emit(
    command: &str,
    result: Result<Vec<u8>, CommandError>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> u8 {
    let error = match result.and_then(|bytes| encode_success(&bytes)) {
        Ok(line) => {
            let _ = writeln!(stdout, "{}", line);
            let _ = stdout.flush();
            return exitcode::OK;
        }
        Err(error) => error,
    };

    tracing::debug!(command, error = %error, "Command failed");
    let _ = writeln!(stderr, "{}", encode_failure(command, &error));
    let _ = stderr.flush();
    exitcode::FAILURE
}
