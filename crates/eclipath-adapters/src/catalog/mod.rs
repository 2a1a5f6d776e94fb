//! User library catalogs.

mod memory;
mod user_libraries;
mod workspace;

use std::path::PathBuf;

use eclipath_core::application::ports::ProjectRegistry;

pub use memory::InMemoryCatalog;
pub use user_libraries::UserLibrariesFile;
pub use workspace::{JDT_CORE_PREFS, USER_LIBRARY_KEY_PREFIX, WorkspaceUserLibraries};

/// Turn an archive path from a library definition into a filesystem path.
///
/// `/Project/lib/a.jar` is resolved inside the folder of `Project` when the
/// registry knows it; anything else is taken as a filesystem path.
pub(crate) fn resolve_archive(path: &str, registry: Option<&dyn ProjectRegistry>) -> PathBuf {
    let Some(registry) = registry else {
        return PathBuf::from(path);
    };

    let Some(relative) = path.strip_prefix('/') else {
        return PathBuf::from(path);
    };

    let (project, rest) = relative.split_once('/').unwrap_or((relative, ""));
    match registry.project_root_folder(project) {
        Ok(folder) if rest.is_empty() => folder,
        Ok(folder) => folder.join(rest),
        Err(_) => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRegistry;

    #[test]
    fn workspace_relative_archives_use_project_folder() {
        let registry = InMemoryRegistry::new().with_project("Jars", "/repo/third-party", []);

        assert_eq!(
            resolve_archive("/Jars/lib/a.jar", Some(&registry)),
            PathBuf::from("/repo/third-party/lib/a.jar")
        );
        assert_eq!(
            resolve_archive("/opt/java/b.jar", Some(&registry)),
            PathBuf::from("/opt/java/b.jar")
        );
        assert_eq!(
            resolve_archive("/Jars/lib/a.jar", None),
            PathBuf::from("/Jars/lib/a.jar")
        );
    }
}
