//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the resolver needs from external systems.
//! The `eclipath-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::ProjectDescriptor;
use crate::error::EclipathResult;

/// Port for filesystem queries.
///
/// Implemented by:
/// - `eclipath_adapters::filesystem::LocalFilesystem` (production)
/// - `eclipath_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Resolve `path` to its canonical absolute form.
    ///
    /// Fails with `ApplicationError::FilesystemError` when the OS cannot.
    fn canonicalize(&self, path: &Path) -> EclipathResult<PathBuf>;

    /// Check if `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the set of known projects and their descriptors.
///
/// Implemented by:
/// - `eclipath_adapters::registry::RepositoryRegistry` (repository checkouts)
/// - `eclipath_adapters::registry::WorkspaceRegistry` (IDE workspace metadata)
/// - `eclipath_adapters::registry::InMemoryRegistry` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProjectRegistry: Send + Sync {
    /// Names of every project the registry knows.
    fn project_names(&self) -> Vec<String>;

    /// Root folder of `name`, as recorded (not canonicalized).
    ///
    /// Fails with `ApplicationError::UnknownProject` for unknown names.
    fn project_root_folder(&self, name: &str) -> EclipathResult<PathBuf>;

    /// Parsed dependency descriptor of `name`.
    ///
    /// Fails with `ApplicationError::MissingDescriptor` when the project has
    /// none; the resolver treats that as "contributes nothing".
    fn project_descriptor(&self, name: &str) -> EclipathResult<ProjectDescriptor>;

    /// Repository folder `name` was discovered in, if known.
    fn repository_of(&self, name: &str) -> Option<PathBuf>;
}

/// Port for a catalog of named user libraries.
///
/// Implemented by:
/// - `eclipath_adapters::catalog::UserLibrariesFile` (exported library file)
/// - `eclipath_adapters::catalog::WorkspaceUserLibraries` (IDE preferences)
/// - `eclipath_adapters::catalog::InMemoryCatalog` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait LibraryCatalog: Send + Sync {
    /// Archives of `library` in declaration order, or `None` if unknown.
    fn jars_for(&self, library: &str) -> Option<Vec<PathBuf>>;

    /// Every library name in the catalog, in declaration order.
    fn library_names(&self) -> Vec<String>;
}

/// Port for the archives backing the built-in test-framework container.
///
/// Implemented by:
/// - `eclipath_adapters::test_archives::LocalTestArchives`
#[cfg_attr(test, mockall::automock)]
pub trait TestArchiveProvider: Send + Sync {
    /// Make the archives available locally and return their paths.
    ///
    /// Called at most once per resolver.
    fn provide(&self) -> EclipathResult<Vec<PathBuf>>;
}
