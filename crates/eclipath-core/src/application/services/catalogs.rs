//! User library catalogs keyed by the repository they were exported from.
//!
//! In fused mode every catalog is merged once into a single lookup space; in
//! isolated mode a project only sees the catalog of its own repository.

use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{
    application::{ApplicationError, ports::LibraryCatalog},
    domain::CatalogMode,
    error::EclipathResult,
};

/// The catalogs a resolver consults.
pub struct CatalogSet {
    mode: CatalogMode,
    catalogs: IndexMap<PathBuf, Arc<dyn LibraryCatalog>>,
    fused: OnceCell<Arc<dyn LibraryCatalog>>,
}

impl CatalogSet {
    pub fn new(mode: CatalogMode) -> Self {
        Self {
            mode,
            catalogs: IndexMap::new(),
            fused: OnceCell::new(),
        }
    }

    /// Register the catalog exported from `repository`.
    ///
    /// A later registration for the same repository replaces the earlier one.
    pub fn insert(&mut self, repository: impl Into<PathBuf>, catalog: Arc<dyn LibraryCatalog>) {
        self.catalogs.insert(repository.into(), catalog);
        self.fused = OnceCell::new();
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Catalog applicable to `project`, or `None` if none is configured.
    ///
    /// `repository` is only consulted in isolated mode.
    pub fn catalog_for<F>(
        &self,
        project: &str,
        repository: F,
    ) -> EclipathResult<Option<Arc<dyn LibraryCatalog>>>
    where
        F: FnOnce() -> Option<PathBuf>,
    {
        if self.catalogs.is_empty() {
            return Ok(None);
        }

        match self.mode {
            CatalogMode::Fused => Ok(Some(Arc::clone(
                self.fused.get_or_init(|| self.build_fused()),
            ))),
            CatalogMode::Isolated => self.isolated_catalog(project, repository()),
        }
    }

    fn isolated_catalog(
        &self,
        project: &str,
        repository: Option<PathBuf>,
    ) -> EclipathResult<Option<Arc<dyn LibraryCatalog>>> {
        if let Some(repository) = repository {
            return Ok(self.catalogs.get(&repository).cloned());
        }

        match self.catalogs.len() {
            1 => Ok(self.catalogs.values().next().cloned()),
            catalogs => Err(ApplicationError::AmbiguousCatalog {
                project: project.to_string(),
                catalogs,
            }
            .into()),
        }
    }

    fn build_fused(&self) -> Arc<dyn LibraryCatalog> {
        let mut libraries: IndexMap<String, Vec<PathBuf>> = IndexMap::new();

        for (repository, catalog) in &self.catalogs {
            for name in catalog.library_names() {
                if libraries.contains_key(&name) {
                    debug!(
                        library = %name,
                        repository = %repository.display(),
                        "user library already defined by an earlier catalog"
                    );
                    continue;
                }
                if let Some(jars) = catalog.jars_for(&name) {
                    libraries.insert(name, jars);
                }
            }
        }

        debug!(libraries = libraries.len(), "fused user library catalogs");
        Arc::new(FusedCatalog { libraries })
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::new(CatalogMode::default())
    }
}

/// Union of several catalogs, first definition of a name wins.
struct FusedCatalog {
    libraries: IndexMap<String, Vec<PathBuf>>,
}

impl LibraryCatalog for FusedCatalog {
    fn jars_for(&self, library: &str) -> Option<Vec<PathBuf>> {
        self.libraries.get(library).cloned()
    }

    fn library_names(&self) -> Vec<String> {
        self.libraries.keys().cloned().collect()
    }
}
