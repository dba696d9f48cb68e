//! Parsers for the per-process kernel files.
//!
//! Each file has its own small parser. The `stat` name field in particular
//! must not be split on spaces or parentheses: the kernel wraps the raw
//! command name in `(` `)` and the name itself may contain either.

use crate::error::{ProcTableError, Result};
use crate::record::Environment;

/// Fields of interest from a `stat` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFields {
    pub name: String,
    pub ppid: i32,
}

/// Parse a `/proc/<pid>/stat` line.
///
/// The name is everything between the first `(` and the last `)`. A name
/// may itself contain spaces and parentheses (`(my (odd) proc)`), so it
/// cannot be taken as the second space-separated field. The fields after
/// the closing parenthesis start with the state, followed by the parent
/// pid.
pub fn parse_stat(pid: u32, line: &str) -> Result<StatFields> {
    let open = line
        .find('(')
        .ok_or_else(|| ProcTableError::parse(pid, "name", "missing opening parenthesis"))?;
    let close = line
        .rfind(')')
        .filter(|&close| close > open)
        .ok_or_else(|| ProcTableError::parse(pid, "name", "missing closing parenthesis"))?;

    let name = line[open + 1..close].to_string();

    let mut rest = line[close + 1..].split_ascii_whitespace();
    let _state = rest
        .next()
        .ok_or_else(|| ProcTableError::parse(pid, "state", "field missing"))?;
    let ppid_field = rest
        .next()
        .ok_or_else(|| ProcTableError::parse(pid, "ppid", "field missing"))?;
    let ppid = ppid_field
        .parse::<i32>()
        .map_err(|e| ProcTableError::parse(pid, "ppid", format!("'{}': {}", ppid_field, e)))?;

    Ok(StatFields { name, ppid })
}

/// Decode a `/proc/<pid>/cmdline` block.
///
/// Every NUL becomes a space, then the final character (the separator
/// after the last argument) is dropped. Zero bytes decode to `""`.
pub fn decode_cmdline(bytes: &[u8]) -> String {
    let mut cmdline = String::from_utf8_lossy(bytes).replace('\0', " ");
    cmdline.pop();
    cmdline
}

/// Parse a `/proc/<pid>/environ` block into a name/value map.
///
/// Entries split on the first `=`. Entries with an empty name are dropped,
/// entries without `=` map to an empty value, and later duplicates win.
pub fn parse_environ(bytes: &[u8]) -> Environment {
    let text = String::from_utf8_lossy(bytes);
    let mut environ = Environment::new();

    for entry in text.split('\0') {
        let (name, value) = entry.split_once('=').unwrap_or((entry, ""));
        if name.is_empty() {
            continue;
        }
        environ.insert(name.to_string(), value.to_string());
    }

    environ
}
