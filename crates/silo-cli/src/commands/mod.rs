//! Command handlers for the silo CLI.

pub mod config;
pub mod export;
pub mod validate;

use std::io::{BufRead, Write};

/// Prompt on stderr and read one trimmed line from stdin. EOF or a blank
/// line comes back as an empty string — callers decide whether that is
/// fatal.
pub(crate) fn prompt(message: &str) -> anyhow::Result<String> {
    eprint!("{message}");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
