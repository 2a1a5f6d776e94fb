//! Registry read from an IDE workspace's resource metadata.
//!
//! Each open project has a folder under [`PROJECTS_METADATA`] named after the
//! project; its binary `.location` file holds the project folder as a
//! `URI//file:/...` string terminated by a NUL byte.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use tracing::{debug, info, instrument, warn};

use eclipath_core::{
    application::{ApplicationError, ports::ProjectRegistry},
    domain::{ProjectDescriptor, project_name_from_reference},
    error::EclipathResult,
};

use crate::{error::AdapterError, registry::read_descriptor};

/// Per-project metadata folder, relative to the workspace.
pub const PROJECTS_METADATA: &str = ".metadata/.plugins/org.eclipse.core.resources/.projects";

const LOCATION_FILE: &str = ".location";
const LOCATION_MARKER: &[u8] = b"URI//file:/";

/// Projects registered in a workspace. Repository information is unavailable.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceRegistry {
    workspace: PathBuf,
    projects: IndexMap<String, PathBuf>,
}

impl WorkspaceRegistry {
    /// Read the project locations of `workspace`.
    ///
    /// Projects without a `.location` file (closed), with an undecodable one,
    /// or whose folder no longer exists are skipped.
    #[instrument(skip_all, fields(workspace = %workspace.as_ref().display()))]
    pub fn open(workspace: impl AsRef<Path>) -> Result<Self, AdapterError> {
        let workspace = workspace.as_ref();
        let metadata = workspace.join(PROJECTS_METADATA);

        let read_dir = fs::read_dir(&metadata).map_err(|source| AdapterError::Read {
            path: metadata.clone(),
            source,
        })?;

        let mut folders = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| AdapterError::Read {
                path: metadata.clone(),
                source,
            })?;
            if entry.path().is_dir() {
                folders.push(entry.path());
            }
        }
        folders.sort();

        let mut projects = IndexMap::new();
        for folder in folders {
            let Some(name) = folder.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
                continue;
            };

            let location = folder.join(LOCATION_FILE);
            if !location.is_file() {
                debug!(project = %name, "no location file, project is probably closed");
                continue;
            }

            let bytes = fs::read(&location).map_err(|source| AdapterError::Read {
                path: location.clone(),
                source,
            })?;

            let Some(project_folder) = decode_location(&bytes) else {
                info!(
                    project = %name,
                    "Could not decode location file, check if project is inside a repository"
                );
                continue;
            };

            if !project_folder.is_dir() {
                debug!(project = %name, folder = %project_folder.display(), "project folder missing");
                continue;
            }

            projects.insert(name, project_folder);
        }

        debug!(projects = projects.len(), "workspace read");
        Ok(Self {
            workspace: workspace.to_path_buf(),
            projects,
        })
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn folder(&self, name: &str) -> EclipathResult<&PathBuf> {
        let name = project_name_from_reference(name);
        self.projects.get(name).ok_or_else(|| {
            ApplicationError::UnknownProject {
                project: name.to_string(),
            }
            .into()
        })
    }
}

impl ProjectRegistry for WorkspaceRegistry {
    fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }

    fn project_root_folder(&self, name: &str) -> EclipathResult<PathBuf> {
        self.folder(name).cloned()
    }

    fn project_descriptor(&self, name: &str) -> EclipathResult<ProjectDescriptor> {
        let folder = self.folder(name)?;
        read_descriptor(project_name_from_reference(name), folder)
    }

    fn repository_of(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

/// Extract the project folder from the raw bytes of a `.location` file.
fn decode_location(bytes: &[u8]) -> Option<PathBuf> {
    let start = bytes
        .windows(LOCATION_MARKER.len())
        .position(|window| window == LOCATION_MARKER)?
        + LOCATION_MARKER.len();

    let rest = &bytes[start..];
    let end = rest.iter().position(|b| *b == 0)?;
    if end == 0 {
        return None;
    }

    let encoded = std::str::from_utf8(&rest[..end]).ok()?;
    let encoded = if cfg!(windows) {
        encoded.to_string()
    } else {
        format!("/{}", encoded)
    };

    match percent_decode_str(&encoded).decode_utf8() {
        Ok(decoded) => Some(PathBuf::from(decoded.as_ref())),
        Err(e) => {
            warn!(location = %encoded, error = %e, "Could not decode project folder");
            None
        }
    }
}
