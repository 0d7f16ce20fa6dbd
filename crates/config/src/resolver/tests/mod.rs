//! Tests for layered resolution.
//!
//! Responsibilities:
//! - Test merge precedence between base, mode and `.local` files.
//! - Test process-environment merging in default and safe mode.
//! - Test that resolution is deterministic for unchanged inputs.
//!
//! Invariants:
//! - Tests inject a fixed `BTreeMap` environment instead of touching the
//!   process environment, so they need no serialization.
//! - Definition files live in temporary directories cleaned up via `tempfile`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::options::PluginConfig;


/// A fixed environment built from literal pairs.
pub fn fixed_env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write `contents` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// A config whose base path is `.env` inside `temp_dir`.
pub fn config_in(temp_dir: &TempDir) -> PluginConfig {
    PluginConfig {
        path: temp_dir.path().join(".env"),
        ..PluginConfig::default()
    }
}
