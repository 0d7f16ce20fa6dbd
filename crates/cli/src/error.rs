//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map transform failures to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use dotenv_import_transform::{SourceError, TransformError};

/// Structured exit codes for dotenv-import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O failures, bad options, anything unclassified.
    GeneralError = 1,

    /// An imported name is not allowlisted or is blocklisted.
    PolicyViolation = 2,

    /// An imported name has no definition and `--strict` is in effect.
    UndefinedReference = 3,

    /// A source file could not be parsed.
    SyntaxError = 4,

    /// A default or namespace import of the virtual module.
    UnsupportedImport = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&TransformError> for ExitCode {
    fn from(err: &TransformError) -> Self {
        match err {
            TransformError::PolicyViolation { .. } => ExitCode::PolicyViolation,
            TransformError::UndefinedReference { .. } => ExitCode::UndefinedReference,
            TransformError::UnsupportedSpecifier { .. } => ExitCode::UnsupportedImport,
        }
    }
}

impl From<&SourceError> for ExitCode {
    fn from(err: &SourceError) -> Self {
        match err {
            SourceError::Parse { .. } => ExitCode::SyntaxError,
            SourceError::Transform { error, .. } => ExitCode::from(error),
            SourceError::Emit { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no transform failure is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<SourceError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<TransformError>() {
                return ExitCode::from(err);
            }
        }
        ExitCode::GeneralError
    }
}
