//! Catalog loaded from an exported user libraries file.
//!
//! ```xml
//! <eclipse-userlibraries version="2">
//!     <library name="Utils" systemlibrary="false">
//!         <archive path="/ThirdParty/lib/a.jar"/>
//!         <archive path="/opt/java/b.jar"/>
//!     </library>
//! </eclipse-userlibraries>
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, instrument};

use eclipath_core::application::ports::{LibraryCatalog, ProjectRegistry};

use crate::{
    catalog::resolve_archive,
    error::AdapterError,
    xml::{parse_xml, read_xml},
};

#[derive(Debug, Deserialize)]
struct UserLibrariesDocument {
    #[serde(rename = "library", default)]
    libraries: Vec<LibraryElement>,
}

#[derive(Debug, Deserialize)]
struct LibraryElement {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "archive", default)]
    archives: Vec<ArchiveElement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveElement {
    #[serde(rename = "@path")]
    pub(crate) path: String,
}

/// User libraries exported from the IDE into one XML file.
#[derive(Debug, Clone, Default)]
pub struct UserLibrariesFile {
    source: PathBuf,
    libraries: IndexMap<String, Vec<PathBuf>>,
}

impl UserLibrariesFile {
    /// Load `path`, resolving project-relative archives through `registry`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(
        path: impl AsRef<Path>,
        registry: Option<&dyn ProjectRegistry>,
    ) -> Result<Self, AdapterError> {
        let path = path.as_ref();
        let document: UserLibrariesDocument = read_xml(path)?;
        Ok(Self::from_document(path, document, registry))
    }

    /// Parse already-read XML; `path` is only used in errors.
    pub fn parse(
        path: impl AsRef<Path>,
        raw: &str,
        registry: Option<&dyn ProjectRegistry>,
    ) -> Result<Self, AdapterError> {
        let path = path.as_ref();
        let document: UserLibrariesDocument = parse_xml(path, raw)?;
        Ok(Self::from_document(path, document, registry))
    }

    fn from_document(
        path: &Path,
        document: UserLibrariesDocument,
        registry: Option<&dyn ProjectRegistry>,
    ) -> Self {
        let mut libraries = IndexMap::new();
        for library in document.libraries {
            if libraries.contains_key(&library.name) {
                debug!(library = %library.name, "library defined twice, keeping the first");
                continue;
            }
            let jars = library
                .archives
                .iter()
                .map(|archive| resolve_archive(&archive.path, registry))
                .collect();
            libraries.insert(library.name, jars);
        }

        debug!(libraries = libraries.len(), "user libraries loaded");
        Self {
            source: path.to_path_buf(),
            libraries,
        }
    }

    /// File the catalog was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl LibraryCatalog for UserLibrariesFile {
    fn jars_for(&self, library: &str) -> Option<Vec<PathBuf>> {
        self.libraries.get(library).cloned()
    }

    fn library_names(&self) -> Vec<String> {
        self.libraries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRegistry;
    use tempfile::TempDir;

    const EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<eclipse-userlibraries version="2">
    <library name="Utils" systemlibrary="false">
        <archive path="/ThirdParty/lib/a.jar"/>
        <archive path="/opt/java/b.jar"/>
    </library>
    <library name="Empty" systemlibrary="false"/>
    <library name="Utils" systemlibrary="false">
        <archive path="/shadowed.jar"/>
    </library>
</eclipse-userlibraries>
"#;

    #[test]
    fn parses_libraries_and_resolves_project_archives() {
        let registry = InMemoryRegistry::new().with_project("ThirdParty", "/repo/third", []);
        let catalog = UserLibrariesFile::parse("user.userlibraries", EXPORT, Some(&registry)).unwrap();

        assert_eq!(catalog.library_names(), ["Utils", "Empty"]);
        assert_eq!(
            catalog.jars_for("Utils"),
            Some(vec![
                PathBuf::from("/repo/third/lib/a.jar"),
                PathBuf::from("/opt/java/b.jar"),
            ])
        );
        assert_eq!(catalog.jars_for("Empty"), Some(vec![]));
        assert_eq!(catalog.jars_for("Nope"), None);
    }

    #[test]
    fn loads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repo.userlibraries");
        std::fs::write(&path, EXPORT).unwrap();

        let catalog = UserLibrariesFile::load(&path, None).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.source(), path.as_path());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = UserLibrariesFile::parse("broken.xml", "<eclipse-userlibraries>", None).unwrap_err();
        assert!(matches!(err, AdapterError::Xml { .. }));
    }
}
