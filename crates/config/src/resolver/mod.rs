//! Layered resolution of definition files and the process environment.
//!
//! Responsibilities:
//! - Select the mode and derive the candidate definition files.
//! - Parse each candidate and merge them into one `ResolvedEnv`.
//! - Fold in the process environment, filtered through the lists in safe mode.
//! - Capture a `Fingerprint` of the candidates for build-cache invalidation.
//!
//! Does NOT handle:
//! - Import validation or substitution (see the transform crate).
//!
//! Invariants / Assumptions:
//! - Resolution never fails; every anomaly degrades to "key absent".
//! - Precedence, lowest first: base file, mode file, process environment.
//! - `.local` files are tracked in the fingerprint but not merged.
//! - The same files and environment always produce the same mapping.
//! - Definition values are literal text; only the injected `EnvSource` is
//!   read, and only when merging.

mod env;
mod files;
mod fingerprint;
mod merge;
mod parse;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::Serialize;

pub use env::{EnvSource, ProcessEnv, select_mode, var_or_none};
pub use files::{CandidateFiles, parse_dotenv_file};
pub use fingerprint::{FileStamp, Fingerprint};
pub use merge::{assign_filtered, assign_non_empty};
pub use parse::{ParsedDotenv, parse_dotenv};

use crate::constants::BUILTIN_BLOCKLIST;
use crate::options::PluginConfig;

/// The flat name-to-value table substitutions are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedEnv(BTreeMap<String, String>);

impl ResolvedEnv {
    /// Look up a resolved value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for ResolvedEnv {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for ResolvedEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything one resolver run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Selected mode.
    pub mode: String,
    /// Candidate files consulted for that mode.
    pub files: CandidateFiles,
    /// The merged mapping.
    pub env: ResolvedEnv,
    /// Modification times of the candidate files.
    pub fingerprint: Fingerprint,
}

/// Resolve the environment mapping for `config` against `env`.
pub fn resolve(config: &PluginConfig, env: &impl EnvSource) -> Resolution {
    let mode = select_mode(&config.env_name, env);
    if config.verbose {
        tracing::info!(mode = %mode, "dotenv mode");
    }

    let files = CandidateFiles::new(&config.path, &mode);
    let fingerprint = Fingerprint::capture(&files);

    // `.local` files only feed the fingerprint.
    let mut merged = parse_dotenv_file(&files.base, config.verbose);
    assign_non_empty(&mut merged, parse_dotenv_file(&files.mode, config.verbose));

    if config.safe {
        let mut blocklist = config.blocklist.clone().unwrap_or_default();
        blocklist.extend(BUILTIN_BLOCKLIST.iter().map(|s| s.to_string()));
        let allowlist = config.allowlist.as_deref().unwrap_or_default();
        assign_filtered(&mut merged, env.vars(), allowlist, &blocklist);
    } else {
        assign_non_empty(&mut merged, env.vars());
    }

    tracing::debug!(
        mode = %mode,
        safe = config.safe,
        count = merged.len(),
        "Resolved environment"
    );

    Resolution {
        mode,
        files,
        env: merged.into(),
        fingerprint,
    }
}
