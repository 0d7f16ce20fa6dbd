//! Compile-time substitution of `@env` imports.
//!
//! This crate rewrites import declarations that name a virtual module into
//! inlined literals read from the environment resolved by
//! `dotenv-import-config`, removing the imports.
//!
//! Entry points:
//! - [`EnvPlugin`]: resolve once per configuration, transform many modules.
//! - [`transform_source`]: parse, transform and print one source file.
//! - `process_transform`: swc Wasm plugin entry (feature `plugin`).

mod error;
pub mod literal;
mod plugin;
#[cfg(feature = "plugin")]
mod plugin_entry;
mod source;
mod substitute;

pub use error::{SourceError, TransformError};
pub use plugin::EnvPlugin;
pub use source::{TransformOutput, syntax_for, transform_source};
pub use substitute::{SubstitutionReport, substitute_module, validate_specifier};
pub use swc_core::common::Span;

#[cfg(feature = "plugin")]
pub use plugin_entry::process_transform;
