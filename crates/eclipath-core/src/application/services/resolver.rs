//! Classpath resolver - the main application orchestrator.
//!
//! Walks a project's dependency descriptor depth-first, following project
//! references, and freezes the result into a [`ResolvedProject`]:
//! 1. Canonicalize the root folder and skip it if already walked
//! 2. Read the descriptor (a missing one contributes nothing)
//! 3. Dispatch every entry by kind
//! 4. Cache the snapshot by project name

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use indexmap::IndexSet;
use once_cell::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, LibraryCatalog, ProjectRegistry, TestArchiveProvider},
        services::catalogs::CatalogSet,
    },
    domain::{
        CanonicalPath, CatalogMode, ContainerRef, DependencyAccumulator, DependencyEntry,
        DomainError, EntryKind, JRE_CONTAINER, ResolvedProject, external_descriptor_path,
        project_name_from_reference,
    },
    error::{EclipathError, EclipathResult},
};

/// Name of the optional build-commands file looked up in each project root.
pub const COMMANDS_FILENAME: &str = "commands.build";

/// Tunables of a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Container identifiers skipped silently.
    pub ignored_containers: Vec<String>,
    /// File name looked up in the root folder for [`ResolvedProject::commands_file`].
    pub commands_filename: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            ignored_containers: vec![JRE_CONTAINER.to_string()],
            commands_filename: COMMANDS_FILENAME.to_string(),
        }
    }
}

type CacheSlot = Arc<OnceCell<Arc<ResolvedProject>>>;

/// Outcome of walking one project.
enum Walk {
    AlreadyVisited,
    Walked {
        root: CanonicalPath,
        source_folders: Vec<String>,
    },
}

/// Resolves and caches the classpath of projects known to a registry.
///
/// Safe to share between threads: every resolution owns its accumulator and
/// the cache guarantees one computation per project name.
pub struct ClasspathResolver {
    registry: Box<dyn ProjectRegistry>,
    filesystem: Box<dyn Filesystem>,
    catalogs: CatalogSet,
    test_archives: Option<Box<dyn TestArchiveProvider>>,
    options: ResolverOptions,
    cache: Mutex<HashMap<String, CacheSlot>>,
    test_archive_files: OnceCell<Vec<PathBuf>>,
}

impl ClasspathResolver {
    /// Create a resolver with no catalogs and no test-framework archives.
    pub fn new(registry: Box<dyn ProjectRegistry>, filesystem: Box<dyn Filesystem>) -> Self {
        Self::builder(registry, filesystem).build()
    }

    /// Start configuring a resolver.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use eclipath_core::application::ClasspathResolver;
    ///
    /// let resolver = ClasspathResolver::builder(
    ///     registry,   // Box<dyn ProjectRegistry>
    ///     filesystem, // Box<dyn Filesystem>
    /// )
    /// .catalog("/repos/core", catalog)
    /// .build();
    ///
    /// let app = resolver.resolve("App")?;
    /// ```
    pub fn builder(
        registry: Box<dyn ProjectRegistry>,
        filesystem: Box<dyn Filesystem>,
    ) -> ClasspathResolverBuilder {
        ClasspathResolverBuilder {
            registry,
            filesystem,
            catalogs: Vec::new(),
            catalog_mode: CatalogMode::default(),
            test_archives: None,
            options: ResolverOptions::default(),
        }
    }

    pub fn registry(&self) -> &dyn ProjectRegistry {
        self.registry.as_ref()
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Resolve `project`, computing it on first request.
    ///
    /// A leading `/` is stripped from the name. Concurrent requests for the
    /// same name compute once; a failed computation is not cached.
    #[instrument(skip(self))]
    pub fn resolve(&self, project: &str) -> EclipathResult<Arc<ResolvedProject>> {
        let project = project_name_from_reference(project);

        let slot = {
            let mut cache = self
                .cache
                .lock()
                .map_err(|_| ApplicationError::CacheLockError)?;
            Arc::clone(cache.entry(project.to_string()).or_default())
        };

        slot.get_or_try_init(|| self.compute(project).map(Arc::new))
            .cloned()
    }

    /// Like [`Self::resolve`], but logs and swallows the error.
    pub fn resolve_or_none(&self, project: &str) -> Option<Arc<ResolvedProject>> {
        match self.resolve(project) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                info!(project, error = %e, "Could not get classpath of project");
                None
            }
        }
    }

    /// `true` once `project` has a cached snapshot.
    pub fn is_resolved(&self, project: &str) -> bool {
        let project = project_name_from_reference(project);
        self.cache
            .lock()
            .map(|cache| cache.get(project).is_some_and(|slot| slot.get().is_some()))
            .unwrap_or(false)
    }

    /// `true` if any project known to the registry declares a dependency
    /// manager descriptor.
    pub fn uses_external_dependency_manager(&self) -> EclipathResult<bool> {
        for project in self.registry.project_names() {
            if self.resolve(&project)?.uses_external_dependency_manager() {
                debug!(project = %project, "project uses an external dependency manager");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// `project` plus every project reachable through dependent project names.
    ///
    /// Order is depth-first discovery order; cycles terminate.
    pub fn dependent_projects_of(&self, project: &str) -> EclipathResult<IndexSet<String>> {
        let mut seen = IndexSet::new();
        self.collect_dependents(project_name_from_reference(project), &mut seen)?;
        Ok(seen)
    }

    fn collect_dependents(&self, project: &str, seen: &mut IndexSet<String>) -> EclipathResult<()> {
        if !seen.insert(project.to_string()) {
            return Ok(());
        }

        let resolved = self.resolve(project)?;
        for dependent in resolved.dependent_project_names() {
            self.collect_dependents(dependent, seen)?;
        }
        Ok(())
    }

    fn compute(&self, project: &str) -> EclipathResult<ResolvedProject> {
        info!(project, "Resolving classpath");

        let mut accumulator = DependencyAccumulator::new(project);
        let (root, source_folders) = match self.walk(project, &mut accumulator)? {
            Walk::Walked {
                root,
                source_folders,
            } => (root, source_folders),
            Walk::AlreadyVisited => {
                return Err(EclipathError::Internal {
                    message: format!("fresh resolution of '{}' saw its root as visited", project),
                });
            }
        };

        let commands_file = root.join(&self.options.commands_filename);
        let commands_file = self
            .filesystem
            .is_file(&commands_file)
            .then_some(commands_file);

        let resolved =
            ResolvedProject::from_accumulator(accumulator, root, source_folders, commands_file);
        debug!(
            project,
            outputs = resolved.output_folders().len(),
            archives = resolved.archive_files().len(),
            "classpath resolved"
        );
        Ok(resolved)
    }

    fn canonical_root(&self, project: &str) -> EclipathResult<CanonicalPath> {
        let folder = self.registry.project_root_folder(project)?;
        let canonical = self.filesystem.canonicalize(&folder)?;
        Ok(CanonicalPath::new(canonical))
    }

    /// Walk `project` into `acc` and return its own source folders.
    fn walk(&self, project: &str, acc: &mut DependencyAccumulator) -> EclipathResult<Walk> {
        let root = self.canonical_root(project)?;
        if !acc.mark_visited(&root) {
            debug!(project, root = %root, "already walked");
            return Ok(Walk::AlreadyVisited);
        }

        let descriptor = match self.registry.project_descriptor(project) {
            Ok(descriptor) => descriptor,
            Err(e) if e.is_missing_descriptor() => {
                info!(project, "Ignoring project without classpath descriptor");
                return Ok(Walk::Walked {
                    root,
                    source_folders: Vec::new(),
                });
            }
            Err(e) => return Err(e),
        };

        let mut source_folders = Vec::new();
        for entry in descriptor.entries() {
            match entry.kind {
                EntryKind::Container => self.add_container(project, &entry.path, acc)?,
                EntryKind::Source => {
                    if let Some(folder) = self.add_source(project, entry, acc)? {
                        source_folders.push(folder);
                    }
                }
                EntryKind::Output => acc.add_output_folder(project, root.join(&entry.path)),
            }
        }

        Ok(Walk::Walked {
            root,
            source_folders,
        })
    }

    /// Local folders come back to the caller; project references are walked.
    fn add_source(
        &self,
        project: &str,
        entry: &DependencyEntry,
        acc: &mut DependencyAccumulator,
    ) -> EclipathResult<Option<String>> {
        match entry.combine_access_rules.as_deref() {
            None if !entry.path.starts_with('/') => return Ok(Some(entry.path.clone())),
            Some("true") => {
                warn!(
                    project,
                    path = %entry.path,
                    "Ignoring source entry with combined access rules, check if that is correct"
                );
                return Ok(None);
            }
            _ => {}
        }

        self.walk(project_name_from_reference(&entry.path), acc)?;
        Ok(None)
    }

    fn add_container(
        &self,
        project: &str,
        path: &str,
        acc: &mut DependencyAccumulator,
    ) -> EclipathResult<()> {
        match ContainerRef::classify(path, &self.options.ignored_containers) {
            ContainerRef::Ignored => debug!(project, container = path, "ignored container"),
            ContainerRef::UserLibrary(library) => self.add_user_library(project, library, acc)?,
            ContainerRef::ExternalDependency(attributes) => {
                if acc.is_owner(project) {
                    acc.set_build_dependency_path(external_descriptor_path(attributes)?);
                } else {
                    acc.add_project_with_build_dependency(project);
                }
            }
            ContainerRef::TestFramework => match self.test_framework_archives()? {
                Some(archives) => acc.add_archives(archives.iter().cloned()),
                None => warn!(
                    project,
                    container = path,
                    "No test framework archives configured, skipping container"
                ),
            },
            ContainerRef::Unknown => {
                let error = DomainError::UnknownContainerKind {
                    project: project.to_string(),
                    container: path.to_string(),
                };
                warn!(error = %error, "Skipping container");
            }
        }
        Ok(())
    }

    fn add_user_library(
        &self,
        project: &str,
        library: &str,
        acc: &mut DependencyAccumulator,
    ) -> EclipathResult<()> {
        let catalog = self
            .catalogs
            .catalog_for(project, || self.registry.repository_of(project))?;

        let jars = catalog.as_deref().and_then(|catalog| catalog.jars_for(library));
        match jars {
            Some(jars) => acc.add_archives(jars),
            None => {
                let error = DomainError::UnresolvedUserLibrary {
                    project: project.to_string(),
                    library: library.to_string(),
                };
                warn!(
                    error = %error,
                    catalogs = self.catalogs.len(),
                    "Export the user libraries from the IDE so they can be found"
                );
            }
        }
        Ok(())
    }

    /// Archives of the test-framework container, fetched at most once.
    fn test_framework_archives(&self) -> EclipathResult<Option<&[PathBuf]>> {
        let Some(provider) = &self.test_archives else {
            return Ok(None);
        };

        self.test_archive_files
            .get_or_try_init(|| provider.provide())
            .map(|archives| Some(archives.as_slice()))
    }
}

/// Builder for [`ClasspathResolver`].
pub struct ClasspathResolverBuilder {
    registry: Box<dyn ProjectRegistry>,
    filesystem: Box<dyn Filesystem>,
    catalogs: Vec<(PathBuf, Arc<dyn LibraryCatalog>)>,
    catalog_mode: CatalogMode,
    test_archives: Option<Box<dyn TestArchiveProvider>>,
    options: ResolverOptions,
}

impl ClasspathResolverBuilder {
    /// Add the user library catalog exported from `repository`.
    pub fn catalog(mut self, repository: impl Into<PathBuf>, catalog: Arc<dyn LibraryCatalog>) -> Self {
        self.catalogs.push((repository.into(), catalog));
        self
    }

    pub fn catalog_mode(mut self, mode: CatalogMode) -> Self {
        self.catalog_mode = mode;
        self
    }

    pub fn test_archives(mut self, provider: Box<dyn TestArchiveProvider>) -> Self {
        self.test_archives = Some(provider);
        self
    }

    /// Skip containers whose identifier (up to the first `/`) is `container`.
    pub fn ignore_container(mut self, container: impl Into<String>) -> Self {
        let container = container.into();
        if !self.options.ignored_containers.contains(&container) {
            self.options.ignored_containers.push(container);
        }
        self
    }

    pub fn options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> ClasspathResolver {
        let mut catalogs = CatalogSet::new(self.catalog_mode);
        for (repository, catalog) in self.catalogs {
            catalogs.insert(repository, catalog);
        }

        ClasspathResolver {
            registry: self.registry,
            filesystem: self.filesystem,
            catalogs,
            test_archives: self.test_archives,
            options: self.options,
            cache: Mutex::new(HashMap::new()),
            test_archive_files: OnceCell::new(),
        }
    }
}
