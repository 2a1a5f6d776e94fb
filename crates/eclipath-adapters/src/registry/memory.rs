//! In-memory registry for testing.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use indexmap::IndexMap;

use eclipath_core::{
    application::{ApplicationError, ports::ProjectRegistry},
    domain::{DependencyEntry, ProjectDescriptor, project_name_from_reference},
    error::EclipathResult,
};

#[derive(Debug, Clone)]
struct MemoryProject {
    root: PathBuf,
    descriptor: Option<ProjectDescriptor>,
    repository: Option<PathBuf>,
}

/// Registry holding projects in memory and counting descriptor reads.
///
/// Clones share the read counters, so a test can keep a handle after moving
/// the registry into a resolver.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    projects: IndexMap<String, MemoryProject>,
    reads: Arc<Mutex<HashMap<String, usize>>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project with the given descriptor entries.
    pub fn with_project(
        mut self,
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = DependencyEntry>,
    ) -> Self {
        self.projects.insert(
            name.into(),
            MemoryProject {
                root: root.into(),
                descriptor: Some(entries.into_iter().collect()),
                repository: None,
            },
        );
        self
    }

    /// Add a project whose descriptor is missing.
    pub fn with_project_without_descriptor(
        mut self,
        name: impl Into<String>,
        root: impl Into<PathBuf>,
    ) -> Self {
        self.projects.insert(
            name.into(),
            MemoryProject {
                root: root.into(),
                descriptor: None,
                repository: None,
            },
        );
        self
    }

    /// Record the repository `name` belongs to.
    pub fn in_repository(mut self, name: &str, repository: impl Into<PathBuf>) -> Self {
        if let Some(project) = self.projects.get_mut(name) {
            project.repository = Some(repository.into());
        }
        self
    }

    /// Number of descriptor reads for `name` so far.
    pub fn descriptor_reads(&self, name: &str) -> usize {
        self.reads
            .lock()
            .map(|reads| reads.get(name).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Number of descriptor reads across all projects.
    pub fn total_descriptor_reads(&self) -> usize {
        self.reads
            .lock()
            .map(|reads| reads.values().sum())
            .unwrap_or(0)
    }

    fn project(&self, name: &str) -> EclipathResult<&MemoryProject> {
        let name = project_name_from_reference(name);
        self.projects.get(name).ok_or_else(|| {
            ApplicationError::UnknownProject {
                project: name.to_string(),
            }
            .into()
        })
    }
}

impl ProjectRegistry for InMemoryRegistry {
    fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }

    fn project_root_folder(&self, name: &str) -> EclipathResult<PathBuf> {
        self.project(name).map(|project| project.root.clone())
    }

    fn project_descriptor(&self, name: &str) -> EclipathResult<ProjectDescriptor> {
        let name = project_name_from_reference(name);
        if let Ok(mut reads) = self.reads.lock() {
            *reads.entry(name.to_string()).or_default() += 1;
        }

        self.project(name)?.descriptor.clone().ok_or_else(|| {
            ApplicationError::MissingDescriptor {
                project: name.to_string(),
            }
            .into()
        })
    }

    fn repository_of(&self, name: &str) -> Option<PathBuf> {
        self.projects
            .get(project_name_from_reference(name))
            .and_then(|project| project.repository.clone())
    }
}
