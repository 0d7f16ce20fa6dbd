//! Candidate definition files and their parsing.
//!
//! Responsibilities:
//! - Derive the four candidate paths from the base path and the mode.
//! - Read one definition file into a flat mapping.
//!
//! Does NOT handle:
//! - Deciding which parsed files take part in the merge (see mod.rs).
//!
//! Invariants:
//! - A missing or unreadable file parses to an empty mapping.
//! - Malformed lines are dropped one by one; valid lines in the same file survive.
//! - Failures are logged only when `verbose` is set, and never include raw
//!   line contents.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::parse::parse_dotenv;
use crate::constants::LOCAL_SUFFIX;

/// The four definition files consulted for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFiles {
    /// `base`
    pub base: PathBuf,
    /// `base.local`
    pub local: PathBuf,
    /// `base.<mode>`
    pub mode: PathBuf,
    /// `base.<mode>.local`
    pub mode_local: PathBuf,
}

impl CandidateFiles {
    /// Derive the candidate set for `mode` from `base`.
    pub fn new(base: &Path, mode: &str) -> Self {
        Self {
            base: base.to_path_buf(),
            local: with_suffix(base, &[LOCAL_SUFFIX]),
            mode: with_suffix(base, &[mode]),
            mode_local: with_suffix(base, &[mode, LOCAL_SUFFIX]),
        }
    }

    /// All four paths: base, local, mode, mode-local.
    pub fn paths(&self) -> [&Path; 4] {
        [&self.base, &self.local, &self.mode, &self.mode_local]
    }
}

/// Append `.segment` for each segment to the final path component.
fn with_suffix(base: &Path, segments: &[&str]) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    for segment in segments {
        path.push(".");
        path.push(segment);
    }
    PathBuf::from(path)
}

/// Parse a definition file into a mapping.
///
/// An unreadable file yields an empty mapping. Lines that are not
/// assignments are dropped and the rest of the file is kept.
pub fn parse_dotenv_file(path: &Path, verbose: bool) -> BTreeMap<String, String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            if verbose {
                tracing::warn!(
                    path = %path.display(),
                    kind = %e.kind(),
                    "Failed to read definition file, skipping it"
                );
            }
            return BTreeMap::new();
        }
    };

    let parsed = parse_dotenv(&String::from_utf8_lossy(&bytes));
    if verbose && !parsed.skipped_lines.is_empty() {
        tracing::warn!(
            path = %path.display(),
            lines = ?parsed.skipped_lines,
            "Skipped lines that are not assignments"
        );
    }

    tracing::debug!(path = %path.display(), count = parsed.entries.len(), "Parsed definition file");
    parsed.entries
}
