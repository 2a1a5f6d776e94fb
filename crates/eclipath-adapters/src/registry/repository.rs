//! Registry built by scanning repository checkouts for `.project` files.
//!
//! # Directory layout expected
//!
//! ```text
//! repo/
//! ├── App/
//! │   ├── .project       ← <projectDescription><name>App</name>
//! │   └── .classpath
//! └── libs/
//!     └── Lib/
//!         ├── .project
//!         └── .classpath
//! ```
//!
//! The project name is the `<name>` of `.project`, not the folder name.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use eclipath_core::{
    application::{ApplicationError, ports::ProjectRegistry},
    domain::{ProjectDescriptor, project_name_from_reference},
    error::EclipathResult,
};

use crate::{error::AdapterError, registry::read_descriptor, xml::read_xml};

/// Project metadata file name.
pub const PROJECT_FILE: &str = ".project";

/// Folders never descended into while scanning.
const SKIPPED_DIRS: [&str; 2] = [".git", ".metadata"];

#[derive(Debug, Deserialize)]
struct ProjectDescription {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectLocation {
    folder: PathBuf,
    repository: PathBuf,
}

/// Projects discovered in one or more repository folders.
#[derive(Debug, Clone, Default)]
pub struct RepositoryRegistry {
    projects: IndexMap<String, ProjectLocation>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a single repository.
    pub fn from_repository(repository: impl AsRef<Path>) -> Result<Self, AdapterError> {
        let mut registry = Self::new();
        registry.add_repository(repository, &HashSet::new())?;
        Ok(registry)
    }

    /// Scan `repository` and register every project not in `ignored`.
    ///
    /// A project name seen before is re-pointed to the new folder. Returns
    /// the number of projects registered by this call.
    #[instrument(skip_all, fields(repository = %repository.as_ref().display()))]
    pub fn add_repository(
        &mut self,
        repository: impl AsRef<Path>,
        ignored: &HashSet<String>,
    ) -> Result<usize, AdapterError> {
        let repository = repository.as_ref();
        let mut added = 0;

        for project_file in find_project_files(repository)? {
            let description: ProjectDescription = match read_xml(&project_file) {
                Ok(description) => description,
                Err(e) => {
                    warn!(file = %project_file.display(), error = %e, "skipping unreadable project file");
                    continue;
                }
            };

            let name = description.name.trim().to_string();
            if ignored.contains(&name) {
                info!(project = %name, "Skipping project (it is in ignore list)");
                continue;
            }

            let Some(folder) = project_file.parent().map(Path::to_path_buf) else {
                continue;
            };

            let location = ProjectLocation {
                folder,
                repository: repository.to_path_buf(),
            };
            if let Some(previous) = self.projects.insert(name.clone(), location) {
                info!(
                    project = %name,
                    previous = %previous.folder.display(),
                    folder = %self.projects[&name].folder.display(),
                    "Duplicate project, replacing previous location"
                );
            }
            added += 1;
        }

        debug!(added, total = self.projects.len(), "repository scanned");
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(project_name_from_reference(name))
    }

    fn location(&self, name: &str) -> EclipathResult<&ProjectLocation> {
        let name = project_name_from_reference(name);
        self.projects.get(name).ok_or_else(|| {
            ApplicationError::UnknownProject {
                project: name.to_string(),
            }
            .into()
        })
    }
}

impl ProjectRegistry for RepositoryRegistry {
    fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }

    fn project_root_folder(&self, name: &str) -> EclipathResult<PathBuf> {
        self.location(name).map(|location| location.folder.clone())
    }

    fn project_descriptor(&self, name: &str) -> EclipathResult<ProjectDescriptor> {
        let location = self.location(name)?;
        read_descriptor(project_name_from_reference(name), &location.folder)
    }

    fn repository_of(&self, name: &str) -> Option<PathBuf> {
        self.projects
            .get(project_name_from_reference(name))
            .map(|location| location.repository.clone())
    }
}

/// Every `.project` file under `repository`, in file-name order.
fn find_project_files(repository: &Path) -> Result<Vec<PathBuf>, AdapterError> {
    let walker = WalkDir::new(repository)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIPPED_DIRS.contains(&name)))
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| AdapterError::Walk {
            root: repository.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && entry.file_name() == PROJECT_FILE {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
