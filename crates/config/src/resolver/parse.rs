//! The dotenv line format.
//!
//! Responsibilities:
//! - Turn definition file text into a flat name-to-value mapping.
//! - Report which lines could not be read as assignments.
//!
//! Does NOT handle:
//! - Reading files (see files.rs).
//!
//! Invariants:
//! - Values are taken literally. `$NAME` and `${NAME}` are plain text and
//!   nothing is looked up in any environment.
//! - A line that is not an assignment is skipped; the lines around it still
//!   count.
//! - Later assignments of a name replace earlier ones.
//!
//! Grammar, one assignment per line unless a quoted value spans lines:
//! `[export ]NAME=value`, `NAME: value`, with `NAME` made of ASCII
//! alphanumerics, `_`, `.` and `-`. Values may be single-, double- or
//! backtick-quoted; double quotes turn `\n` and `\r` into line breaks.
//! Unquoted values end at `#` and are trimmed.

use std::collections::BTreeMap;

/// Result of parsing one definition file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDotenv {
    /// Assignments, last one wins.
    pub entries: BTreeMap<String, String>,
    /// One-based numbers of lines that were not assignments.
    pub skipped_lines: Vec<usize>,
}

/// Parse dotenv text.
pub fn parse_dotenv(content: &str) -> ParsedDotenv {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let mut parsed = ParsedDotenv::default();

    let mut index = 0;
    while index < lines.len() {
        let line_number = index + 1;
        let line = lines[index].trim_start();
        index += 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, rest)) = split_assignment(line) else {
            parsed.skipped_lines.push(line_number);
            continue;
        };

        let rest = rest.trim_start();
        let value = match rest.chars().next() {
            Some(quote @ ('"' | '\'' | '`')) => {
                match quoted_value(rest, quote, &lines[index..]) {
                    Some((value, consumed)) => {
                        index += consumed;
                        value
                    }
                    None => unquoted_value(rest),
                }
            }
            _ => unquoted_value(rest),
        };

        parsed.entries.insert(name.to_string(), value);
    }

    parsed
}

/// Split `line` into its name and the text after the separator.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    if let Some(after_export) = line.strip_prefix("export")
        && after_export.starts_with([' ', '\t'])
        && let Some(split) = split_name(after_export.trim_start())
    {
        return Some(split);
    }
    split_name(line)
}

fn split_name(line: &str) -> Option<(&str, &str)> {
    let name_len = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        .unwrap_or(line.len());
    if name_len == 0 {
        return None;
    }
    let (name, rest) = line.split_at(name_len);

    if let Some(value) = rest.trim_start_matches([' ', '\t']).strip_prefix('=') {
        return Some((name, value));
    }
    // `NAME: value` needs whitespace after the colon.
    let value = rest.strip_prefix(':')?;
    if value.is_empty() || value.starts_with([' ', '\t']) {
        return Some((name, value));
    }
    None
}

/// Read a quoted value starting at `rest`, continuing into `following` lines
/// until the closing quote. Returns the value and the number of extra lines
/// used, or `None` when the quote never closes cleanly.
///
/// `\<quote>` does not close the value unless no later quote can: the
/// latest candidate followed only by blanks or a comment wins.
fn quoted_value(rest: &str, quote: char, following: &[&str]) -> Option<(String, usize)> {
    let mut text = rest[quote.len_utf8()..].to_string();
    let mut appended = 0;
    while closing_quote(&text, quote).is_none() {
        let Some(next) = following.get(appended) else {
            break;
        };
        text.push('\n');
        text.push_str(next);
        appended += 1;
    }

    let unescaped = closing_quote(&text, quote);
    let mut candidates: Vec<usize> = text[..unescaped.unwrap_or(text.len())]
        .match_indices(quote)
        .map(|(offset, _)| offset)
        .collect();
    candidates.extend(unescaped);

    let end = candidates.into_iter().rev().find(|&end| {
        let line_rest = text[end + quote.len_utf8()..]
            .split('\n')
            .next()
            .unwrap_or_default()
            .trim();
        line_rest.is_empty() || line_rest.starts_with('#')
    })?;

    let consumed = text[..end].matches('\n').count();
    let mut value = text[..end].to_string();
    if quote == '"' {
        value = value.replace("\\n", "\n").replace("\\r", "\r");
    }
    Some((value, consumed))
}

/// Byte offset of the first `quote` not preceded by a backslash.
fn closing_quote(text: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (offset, c) in text.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            c if c == quote && !escaped => return Some(offset),
            _ => escaped = false,
        }
    }
    None
}

fn unquoted_value(rest: &str) -> String {
    let value = rest.split('#').next().unwrap_or_default();
    value.trim().to_string()
}
