//! Plugin option types.
//!
//! Responsibilities:
//! - Define `PluginConfig`, the immutable option record supplied once per pass.
//! - Deserialize the camelCase option object hosts pass to the plugin.
//! - Answer the allowlist/blocklist membership questions the transform asks.
//!
//! Does NOT handle:
//! - Reading definition files or the process environment (see `resolver`).
//!
//! Invariants:
//! - An absent list means "no restriction"; an empty allowlist behaves like
//!   an absent one when merging the process environment in safe mode, but
//!   rejects every import at the transform stage.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENV_NAME, DEFAULT_MODULE_NAME, DEFAULT_PATH};
use crate::error::ConfigError;

/// Options for one substitution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Variable whose value selects the mode (checked before `BABEL_ENV`).
    pub env_name: String,
    /// Name of the virtual module imports are read from.
    pub module_name: String,
    /// Base definition file. Mode and local variants are derived from it.
    pub path: PathBuf,
    /// Names that may be imported. `None` allows every name.
    pub allowlist: Option<Vec<String>>,
    /// Names that may not be imported. `None` blocks nothing.
    pub blocklist: Option<Vec<String>>,
    /// Filter the process environment through the lists before merging it.
    pub safe: bool,
    /// Substitute `undefined` for names with no definition instead of failing.
    pub allow_undefined: bool,
    /// Log skipped files and the selected mode.
    pub verbose: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            env_name: DEFAULT_ENV_NAME.to_string(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
            path: PathBuf::from(DEFAULT_PATH),
            allowlist: None,
            blocklist: None,
            safe: false,
            allow_undefined: true,
            verbose: false,
        }
    }
}

impl PluginConfig {
    /// Parse options from a JSON object string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidOptions {
            message: e.to_string(),
        })
    }

    /// Read options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::OptionsRead {
            path: path.to_path_buf(),
            kind: e.kind(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::OptionsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether importing `name` breaks the configured allow/block policy.
    ///
    /// Only the configured lists take part; the built-in safe-mode entries
    /// apply to environment merging, not to imports.
    pub fn rejects(&self, name: &str) -> bool {
        let not_allowed = self
            .allowlist
            .as_ref()
            .is_some_and(|list| !list.iter().any(|n| n == name));
        let blocked = self
            .blocklist
            .as_ref()
            .is_some_and(|list| list.iter().any(|n| n == name));
        not_allowed || blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_options() {
        let config = PluginConfig::default();
        assert_eq!(config.env_name, "APP_ENV");
        assert_eq!(config.module_name, "@env");
        assert_eq!(config.path, PathBuf::from(".env"));
        assert!(config.allowlist.is_none());
        assert!(config.blocklist.is_none());
        assert!(!config.safe);
        assert!(config.allow_undefined);
        assert!(!config.verbose);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PluginConfig::from_json_str(r#"{"moduleName": "react-native-dotenv", "safe": true}"#)
                .unwrap();
        assert_eq!(config.module_name, "react-native-dotenv");
        assert!(config.safe);
        assert_eq!(config.env_name, "APP_ENV");
        assert!(config.allow_undefined);
    }

    #[test]
    fn test_json_lists_and_flags() {
        let config = PluginConfig::from_json_str(
            r#"{"allowlist": ["API_URL"], "blocklist": ["SECRET"], "allowUndefined": false, "path": "config/.env"}"#,
        )
        .unwrap();
        assert_eq!(config.allowlist, Some(vec!["API_URL".to_string()]));
        assert_eq!(config.blocklist, Some(vec!["SECRET".to_string()]));
        assert!(!config.allow_undefined);
        assert_eq!(config.path, PathBuf::from("config/.env"));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let result = PluginConfig::from_json_str(r#"{"whitelist": ["A"]}"#);
        assert!(matches!(result, Err(ConfigError::InvalidOptions { .. })));
    }

    #[test]
    fn test_rejects_follows_lists() {
        let mut config = PluginConfig::default();
        assert!(!config.rejects("ANY"));

        config.allowlist = Some(vec!["FOO".to_string()]);
        assert!(!config.rejects("FOO"));
        assert!(config.rejects("BAR"));

        config.allowlist = None;
        config.blocklist = Some(vec!["BAR".to_string()]);
        assert!(config.rejects("BAR"));
        assert!(!config.rejects("FOO"));
    }

    #[test]
    fn test_empty_allowlist_rejects_every_import() {
        let config = PluginConfig {
            allowlist: Some(Vec::new()),
            ..PluginConfig::default()
        };
        assert!(config.rejects("FOO"));
    }

    #[test]
    fn test_builtin_blocklist_does_not_reject_imports() {
        let config = PluginConfig::default();
        assert!(!config.rejects("EXPO_PUBLIC_"));
    }
}
