//! Error types for the substitution pass and its source adapter.
//!
//! Responsibilities:
//! - Define the hard failures of the pass: policy violations, undefined
//!   references and import forms that cannot be substituted.
//! - Define the failures of the parse/print adapter around the pass.
//!
//! Does NOT handle:
//! - Resolution anomalies. Missing or malformed definition files are never
//!   errors; they resolve to absent keys.
//!
//! Invariants:
//! - Every pass error carries the span of the offending specifier.
//! - Messages name the imported identifier, never its resolved value.

use std::path::PathBuf;

use swc_core::common::Span;
use thiserror::Error;

/// A failure raised while substituting one import declaration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The name is missing from the configured allowlist or present in the blocklist.
    #[error("\"{name}\" is not allowed or is blocked.")]
    PolicyViolation { name: String, span: Span },

    /// The name has no definition and `allowUndefined` is off.
    #[error("\"{name}\" is not defined in {}", .path.display())]
    UndefinedReference {
        name: String,
        path: PathBuf,
        span: Span,
    },

    /// A default or namespace import of the virtual module.
    #[error("only named imports can be read from \"{module}\"")]
    UnsupportedSpecifier { module: String, span: Span },
}

impl TransformError {
    /// Location of the specifier that failed.
    pub fn span(&self) -> Span {
        match self {
            TransformError::PolicyViolation { span, .. }
            | TransformError::UndefinedReference { span, .. }
            | TransformError::UnsupportedSpecifier { span, .. } => *span,
        }
    }
}

/// A failure of the parse, transform, print round trip over one file.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{file}:{line}:{column}: syntax error: {message}")]
    Parse {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("{file}:{line}:{column}: {error}")]
    Transform {
        file: String,
        line: usize,
        column: usize,
        error: TransformError,
    },

    #[error("failed to print {file}")]
    Emit {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// The pass error behind this failure, if it came from the pass.
    pub fn transform_error(&self) -> Option<&TransformError> {
        match self {
            SourceError::Transform { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_core::common::DUMMY_SP;

    #[test]
    fn test_messages_name_the_identifier() {
        let policy = TransformError::PolicyViolation {
            name: "BAR".to_string(),
            span: DUMMY_SP,
        };
        assert_eq!(policy.to_string(), "\"BAR\" is not allowed or is blocked.");

        let undefined = TransformError::UndefinedReference {
            name: "BAZ".to_string(),
            path: PathBuf::from(".env"),
            span: DUMMY_SP,
        };
        assert_eq!(undefined.to_string(), "\"BAZ\" is not defined in .env");
    }

    #[test]
    fn test_source_error_prefixes_location() {
        let err = SourceError::Transform {
            file: "App.js".to_string(),
            line: 3,
            column: 10,
            error: TransformError::PolicyViolation {
                name: "BAR".to_string(),
                span: DUMMY_SP,
            },
        };
        assert_eq!(
            err.to_string(),
            "App.js:3:10: \"BAR\" is not allowed or is blocked."
        );
        assert!(err.transform_error().is_some());
    }
}
