//! Read-only environment sources and mode selection.
//!
//! Responsibilities:
//! - Abstract the process environment behind `EnvSource` so resolution can run
//!   against a fixed mapping in tests.
//! - Select the mode from the configured selector, `BABEL_ENV` and `NODE_ENV`.
//!
//! Does NOT handle:
//! - Merging environment values into the resolved mapping (see merge.rs).
//!
//! Invariants:
//! - Sources are only read, never mutated.
//! - Empty selector values are treated as unset and fall through to the next one.
//! - Variables whose name or value is not valid UTF-8 are invisible.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::constants::{BABEL_ENV, DEFAULT_MODE, NODE_ENV};

/// A read-only key/value view of an environment.
pub trait EnvSource {
    /// Look up a single variable.
    fn var(&self, key: &str) -> Option<String>;

    /// Snapshot every variable, in the source's own order.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

/// Read a variable, returning None if unset or empty.
pub fn var_or_none(env: &impl EnvSource, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.is_empty())
}

/// Pick the mode: `env_name`, then `BABEL_ENV`, then `NODE_ENV`, else `development`.
pub fn select_mode(env_name: &str, env: &impl EnvSource) -> String {
    [env_name, BABEL_ENV, NODE_ENV]
        .into_iter()
        .find_map(|key| var_or_none(env, key))
        .unwrap_or_else(|| DEFAULT_MODE.to_string())
}
