use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Replace every `\` with `/`.
///
/// Folder paths leaving the resolver go through this so that the same
/// physical folder compares equal however it was spelled.
pub fn normalize_separators(path: &Path) -> PathBuf {
    PathBuf::from(path.to_string_lossy().replace('\\', "/"))
}

/// A project root folder after canonicalization and separator normalization.
///
/// Invariant: contains no `\` separators. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalPath(PathBuf);

impl CanonicalPath {
    /// Wrap an already canonical path, normalizing its separators.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(normalize_separators(path.as_ref()))
    }

    /// Join a relative segment, keeping separators normalized.
    pub fn join(&self, segment: impl AsRef<Path>) -> PathBuf {
        normalize_separators(&self.0.join(segment))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Project name as written in a `src` entry that references another project.
///
/// Older descriptors write `/Name`; the leading separator is dropped.
pub fn project_name_from_reference(reference: &str) -> &str {
    reference.strip_prefix('/').unwrap_or(reference)
}
