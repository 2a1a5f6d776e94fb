//! In-memory filesystem adapter for testing.

use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use eclipath_core::{
    application::{ApplicationError, ports::Filesystem},
    error::EclipathResult,
};

/// In-memory filesystem for testing.
///
/// Canonicalization is lexical: `.` and `..` segments are folded and links
/// registered with [`MemoryFilesystem::add_link`] are followed.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashSet<PathBuf>,
    directories: HashSet<PathBuf>,
    links: Vec<(PathBuf, PathBuf)>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register a directory and all its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in lexical(path.as_ref()).components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Register a regular file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>) -> &Self {
        let path = lexical(path.as_ref());
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path);
        }
        self
    }

    /// Make `alias` canonicalize to `target`, like a symbolic link.
    pub fn add_link(&self, alias: impl AsRef<Path>, target: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner
                .links
                .push((lexical(alias.as_ref()), lexical(target.as_ref())));
        }
        self
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn canonicalize(&self, path: &Path) -> EclipathResult<PathBuf> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CacheLockError)?;

        let mut resolved = lexical(path);
        for (alias, target) in &inner.links {
            if let Ok(rest) = resolved.strip_prefix(alias) {
                resolved = target.join(rest);
                break;
            }
        }

        if inner.directories.contains(&resolved) || inner.files.contains(&resolved) {
            Ok(resolved)
        } else {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into())
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains(&lexical(path)))
            .unwrap_or(false)
    }

    fn exists(&self, path: &Path) -> bool {
        let path = lexical(path);
        self.inner
            .read()
            .map(|inner| inner.files.contains(&path) || inner.directories.contains(&path))
            .unwrap_or(false)
    }
}

/// Fold `.` and `..` without touching the disk.
fn lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use eclipath_core::error::EclipathError;

    #[test]
    fn canonicalize_folds_dot_segments() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/ws/App");

        assert_eq!(
            fs.canonicalize(Path::new("/ws/Lib/../App/.")).unwrap(),
            PathBuf::from("/ws/App")
        );
    }

    #[test]
    fn links_are_followed() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/ws/App").add_link("/alias", "/ws/App");

        assert_eq!(
            fs.canonicalize(Path::new("/alias")).unwrap(),
            PathBuf::from("/ws/App")
        );
    }

    #[test]
    fn missing_paths_fail() {
        let fs = MemoryFilesystem::new();
        let err = fs.canonicalize(Path::new("/nowhere")).unwrap_err();
        assert!(matches!(
            err,
            EclipathError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn files_create_parents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/ws/App/commands.build");

        assert!(fs.is_file(Path::new("/ws/App/commands.build")));
        assert!(fs.exists(Path::new("/ws/App")));
        assert!(!fs.is_file(Path::new("/ws/App")));
        assert_eq!(fs.list_files().len(), 1);
    }
}
