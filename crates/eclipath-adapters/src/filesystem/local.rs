//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use eclipath_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{EclipathError, EclipathResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn canonicalize(&self, path: &Path) -> EclipathResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|e| map_io_error(path, e, "canonicalize"))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> EclipathError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn canonicalize_resolves_dot_segments() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("App")).unwrap();

        let fs = LocalFilesystem::new();
        let direct = fs.canonicalize(&temp.path().join("App")).unwrap();
        let dotted = fs
            .canonicalize(&temp.path().join("App").join("..").join("App"))
            .unwrap();

        assert_eq!(direct, dotted);
        assert!(direct.is_absolute());
    }

    #[test]
    fn canonicalize_missing_folder_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("Ghost");

        let err = LocalFilesystem::new().canonicalize(&missing).unwrap_err();
        assert!(matches!(
            err,
            EclipathError::Application(ApplicationError::FilesystemError { ref path, .. }) if path == &missing
        ));
    }

    #[test]
    fn is_file_distinguishes_folders() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("commands.build"), "ant jar").unwrap();

        let fs = LocalFilesystem::new();
        assert!(fs.is_file(&temp.path().join("commands.build")));
        assert!(!fs.is_file(temp.path()));
        assert!(fs.exists(temp.path()));
    }
}
