//! Shared test utilities for dotenv-import CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory running inside a temp directory.
//! - Write definition and source files for a test.
//!
//! Invariants / Assumptions:
//! - Mode selector variables and the options-file variable are cleared, so
//!   the host environment cannot change the selected mode.

use std::fs;
use std::path::Path;

use assert_cmd::Command;

/// Returns a hermetic `dotenv-import` command running in `dir`.
pub fn dotenv_import_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dotenv-import");
    cmd.current_dir(dir);

    cmd.env_remove("APP_ENV")
        .env_remove("BABEL_ENV")
        .env_remove("NODE_ENV")
        .env_remove("DOTENV_IMPORT_CONFIG")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `name` inside `dir`.
pub fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}
