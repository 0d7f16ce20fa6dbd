//! `resolve` command: print the resolved mapping.
//!
//! Invariants:
//! - `--format dotenv` output parses back to the same mapping. The one
//!   exception is a value holding all three quote characters together with a
//!   backslash sequence, which double quotes cannot carry.

use std::io::Write;

use anyhow::Result;
use dotenv_import_transform::EnvPlugin;

use crate::args::ResolveFormat;

pub fn run(plugin: &EnvPlugin, format: ResolveFormat) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        ResolveFormat::Json => {
            serde_json::to_writer_pretty(&mut out, plugin.env())?;
            writeln!(out)?;
        }
        ResolveFormat::Dotenv => {
            for (name, value) in plugin.env().iter() {
                writeln!(out, "{}={}", name, quote_value(value))?;
            }
        }
    }
    Ok(())
}

/// Quote `value` so the definition file parser reads it back unchanged.
///
/// Single and backtick quotes are taken literally, so the first one the value
/// does not contain is used. Carriage returns only survive in double quotes.
fn quote_value(value: &str) -> String {
    if !value.contains('\r') {
        if !value.contains('\'') {
            return format!("'{value}'");
        }
        if !value.contains('`') {
            return format!("`{value}`");
        }
    }
    let escaped = value.replace('\n', "\\n").replace('\r', "\\r");
    format!("\"{escaped}\"")
}
