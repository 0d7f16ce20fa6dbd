//! Centralized constants for the dotenv-import workspace.
//!
//! This module contains default option values and the fixed variable names
//! consulted during resolution, shared by the resolver, the transform and the CLI.

// =============================================================================
// Option Defaults
// =============================================================================

/// Default name of the variable that selects the mode.
pub const DEFAULT_ENV_NAME: &str = "APP_ENV";

/// Default name of the virtual module whose imports are substituted.
pub const DEFAULT_MODULE_NAME: &str = "@env";

/// Default base definition file path.
pub const DEFAULT_PATH: &str = ".env";

// =============================================================================
// Mode Selection
// =============================================================================

/// Build-environment variable consulted after the configured selector.
pub const BABEL_ENV: &str = "BABEL_ENV";

/// Node environment variable consulted after `BABEL_ENV`.
pub const NODE_ENV: &str = "NODE_ENV";

/// Mode used when no selector variable is set.
pub const DEFAULT_MODE: &str = "development";

// =============================================================================
// Safe Mode
// =============================================================================

/// Entries always appended to the blocklist when merging the process
/// environment in safe mode.
///
/// These are compared with exact string equality, so only variables named
/// exactly `EXPO_PUBLIC_` or `EXPO_` are excluded.
pub const BUILTIN_BLOCKLIST: [&str; 2] = ["EXPO_PUBLIC_", "EXPO_"];

/// Suffix of the machine-local override files.
pub const LOCAL_SUFFIX: &str = "local";
