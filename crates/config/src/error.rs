//! Error types for loading plugin options.
//!
//! Responsibilities:
//! - Define error variants for option files and option strings that cannot be used.
//!
//! Does NOT handle:
//! - Definition file failures. A missing or malformed `.env` file is never an
//!   error; the resolver degrades it to an empty mapping.
//!
//! Invariants:
//! - All error variants include context for debugging (paths, serde messages).

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading plugin options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid plugin options: {message}")]
    InvalidOptions { message: String },

    #[error("Failed to read options file at {path}: {kind}")]
    OptionsRead { path: PathBuf, kind: ErrorKind },

    #[error("Failed to parse options file at {path}: {message}")]
    OptionsParse { path: PathBuf, message: String },
}
