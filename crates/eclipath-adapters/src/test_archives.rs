//! Local cache of the archives backing the JUnit 4 container.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use eclipath_core::{application::ports::TestArchiveProvider, error::EclipathResult};

use crate::error::AdapterError;

/// Archives the JUnit 4 container stands for, in classpath order.
pub const JUNIT4_ARCHIVES: [&str; 2] = ["junit-4.13.2.jar", "hamcrest-core-1.3.jar"];

/// Copies the JUnit 4 archives from `source_dir` into `cache_dir` on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTestArchives {
    source_dir: PathBuf,
    cache_dir: PathBuf,
}

impl LocalTestArchives {
    pub fn new(source_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn ensure_cached(&self, archive: &str) -> Result<PathBuf, AdapterError> {
        let target = self.cache_dir.join(archive);
        if target.is_file() {
            debug!(archive, "already cached");
            return Ok(target);
        }

        let source = self.source_dir.join(archive);
        let bytes = fs::read(&source).map_err(|err| AdapterError::Read {
            path: source.clone(),
            source: err,
        })?;

        // Staged next to the target so an interrupted copy never looks cached.
        let write_failed = |err: io::Error| AdapterError::Write {
            path: target.clone(),
            source: err,
        };
        let mut staged = NamedTempFile::new_in(&self.cache_dir).map_err(write_failed)?;
        staged.write_all(&bytes).map_err(write_failed)?;
        staged.persist(&target).map_err(|err| write_failed(err.error))?;
        info!(archive, cache = %self.cache_dir.display(), "Copied test framework archive");
        Ok(target)
    }
}

impl TestArchiveProvider for LocalTestArchives {
    #[instrument(skip(self), fields(cache = %self.cache_dir.display()))]
    fn provide(&self) -> EclipathResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.cache_dir).map_err(|source| AdapterError::Write {
            path: self.cache_dir.clone(),
            source,
        })?;

        let mut archives = Vec::with_capacity(JUNIT4_ARCHIVES.len());
        for archive in JUNIT4_ARCHIVES {
            archives.push(self.ensure_cached(archive)?);
        }
        Ok(archives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eclipath_core::{application::ApplicationError, error::EclipathError};
    use tempfile::TempDir;

    fn bundled() -> TempDir {
        let dir = TempDir::new().unwrap();
        for archive in JUNIT4_ARCHIVES {
            fs::write(dir.path().join(archive), archive.as_bytes()).unwrap();
        }
        dir
    }

    #[test]
    fn copies_archives_into_cache() {
        let source = bundled();
        let cache = TempDir::new().unwrap();
        let provider = LocalTestArchives::new(source.path(), cache.path().join("junit"));

        let archives = provider.provide().unwrap();

        assert_eq!(
            archives,
            [
                cache.path().join("junit/junit-4.13.2.jar"),
                cache.path().join("junit/hamcrest-core-1.3.jar"),
            ]
        );
        assert!(archives.iter().all(|a| a.is_file()));
    }

    #[test]
    fn cached_archives_are_not_overwritten() {
        let source = bundled();
        let cache = TempDir::new().unwrap();
        fs::write(cache.path().join("junit-4.13.2.jar"), b"local build").unwrap();

        LocalTestArchives::new(source.path(), cache.path())
            .provide()
            .unwrap();

        assert_eq!(
            fs::read(cache.path().join("junit-4.13.2.jar")).unwrap(),
            b"local build"
        );
    }

    #[test]
    fn failed_cache_write_names_the_target() {
        let source = bundled();
        let cache = TempDir::new().unwrap();
        let target = cache.path().join("junit-4.13.2.jar");
        fs::create_dir(&target).unwrap();

        let err = LocalTestArchives::new(source.path(), cache.path())
            .ensure_cached("junit-4.13.2.jar")
            .unwrap_err();

        assert!(matches!(err, AdapterError::Write { ref path, .. } if *path == target));
        let leftovers: Vec<_> = fs::read_dir(cache.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn missing_source_archive_is_filesystem_error() {
        let source = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();

        let err = LocalTestArchives::new(source.path(), cache.path())
            .provide()
            .unwrap_err();
        assert!(matches!(
            err,
            EclipathError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert_eq!(fs::read_dir(cache.path()).unwrap().count(), 0);
    }
}
