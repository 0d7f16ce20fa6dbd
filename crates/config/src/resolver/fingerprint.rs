//! Modification-time fingerprint of the candidate definition files.
//!
//! Responsibilities:
//! - Record every candidate path (absolute) with its modification time.
//! - Tell a host which files to register as external dependencies and when
//!   its cached output is stale.
//!
//! Does NOT handle:
//! - Storing cached output. Hosts own their build cache.
//!
//! Invariants:
//! - All four candidates are recorded, including `.local` files and files
//!   that do not exist yet, so creating one invalidates the cache.
//! - A missing or unreadable file has no modification time.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use serde::Serialize;

use super::files::CandidateFiles;

/// One tracked file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileStamp {
    /// Absolute path of the candidate.
    pub path: PathBuf,
    /// Modification time in milliseconds since the Unix epoch.
    pub modified_ms: Option<u64>,
}

impl FileStamp {
    fn capture(path: &Path) -> Self {
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let modified_ms = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .and_then(|d| u64::try_from(d.as_millis()).ok());
        Self { path, modified_ms }
    }
}

/// Snapshot of the candidate files for cache invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fingerprint {
    stamps: Vec<FileStamp>,
}

impl Fingerprint {
    /// Stat every candidate file now.
    pub fn capture(files: &CandidateFiles) -> Self {
        Self {
            stamps: files.paths().into_iter().map(FileStamp::capture).collect(),
        }
    }

    /// The recorded stamps, in candidate order.
    pub fn stamps(&self) -> &[FileStamp] {
        &self.stamps
    }

    /// Absolute paths a host should register as external dependencies.
    pub fn dependencies(&self) -> impl Iterator<Item = &Path> {
        self.stamps.iter().map(|s| s.path.as_path())
    }

    /// Re-stat the tracked files and report whether any of them changed.
    pub fn is_stale(&self) -> bool {
        self.stamps
            .iter()
            .any(|stamp| FileStamp::capture(&stamp.path) != *stamp)
    }

    /// A compact key folding every path and modification time together.
    ///
    /// Stable within one build of the toolchain; not meant to be persisted
    /// across compiler upgrades.
    pub fn cache_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
