//! Merge policies for layering definition sources.
//!
//! Responsibilities:
//! - Overlay one source onto the resolved mapping, skipping empty values.
//! - Overlay one source through allowlist/blocklist filtering (safe mode).
//!
//! Invariants:
//! - `assign_non_empty` never writes an empty value, so an empty incoming
//!   value cannot clear one set by an earlier layer.
//! - `assign_filtered` compares names with exact string equality.

use std::collections::BTreeMap;

/// Copy every entry with a non-empty value from `source` into `target`.
pub fn assign_non_empty<I>(target: &mut BTreeMap<String, String>, source: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in source {
        if !value.is_empty() {
            target.insert(key, value);
        }
    }
}

/// Copy entries from `source` into `target`, skipping names in `blocklist`
/// and, when `allowlist` is non-empty, names missing from it.
pub fn assign_filtered<I>(
    target: &mut BTreeMap<String, String>,
    source: I,
    allowlist: &[String],
    blocklist: &[String],
) where
    I: IntoIterator<Item = (String, String)>,
{
    for (key, value) in source {
        if blocklist.contains(&key) {
            continue;
        }
        if allowlist.is_empty() || allowlist.contains(&key) {
            target.insert(key, value);
        }
    }
}
