//! In-memory library catalog for testing.

use std::path::PathBuf;

use indexmap::IndexMap;

use eclipath_core::application::ports::LibraryCatalog;

/// Catalog holding library definitions in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    libraries: IndexMap<String, Vec<PathBuf>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `name` with the given archives, replacing any earlier definition.
    pub fn with_library<I, P>(mut self, name: impl Into<String>, jars: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.libraries
            .insert(name.into(), jars.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl LibraryCatalog for InMemoryCatalog {
    fn jars_for(&self, library: &str) -> Option<Vec<PathBuf>> {
        self.libraries.get(library).cloned()
    }

    fn library_names(&self) -> Vec<String> {
        self.libraries.keys().cloned().collect()
    }
}
