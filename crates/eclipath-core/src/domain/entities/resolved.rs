use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::entities::{accumulator::DependencyAccumulator, common::CanonicalPath};

/// Everything one project needs to build, flattened across its references.
///
/// Produced once per project name by the resolver and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProject {
    name: String,
    root_folder: CanonicalPath,
    source_folders: Vec<String>,
    output_folders: IndexMap<String, PathBuf>,
    archive_files: Vec<PathBuf>,
    build_dependency_path: Option<String>,
    dependent_project_names: Vec<String>,
    transitive_build_dependency_projects: Vec<String>,
    external_dependency_descriptor: Option<PathBuf>,
    commands_file: Option<PathBuf>,
}

impl ResolvedProject {
    /// Freeze an accumulator.
    ///
    /// `source_folders` are the owner's own `src` folders; `commands_file`
    /// is the extra build-commands file if it exists in the root.
    pub fn from_accumulator(
        accumulator: DependencyAccumulator,
        root_folder: CanonicalPath,
        source_folders: Vec<String>,
        commands_file: Option<PathBuf>,
    ) -> Self {
        let parts = accumulator.into_parts();

        let dependent_project_names = parts
            .output_folders
            .keys()
            .filter(|project| **project != parts.owner)
            .cloned()
            .collect();

        let external_dependency_descriptor = parts
            .build_dependency_path
            .as_ref()
            .map(|path| root_folder.join(path));

        Self {
            name: parts.owner,
            root_folder,
            source_folders,
            output_folders: parts.output_folders,
            archive_files: parts.archives.into_iter().collect(),
            build_dependency_path: parts.build_dependency_path,
            dependent_project_names,
            transitive_build_dependency_projects: parts
                .projects_with_build_dependency
                .into_iter()
                .collect(),
            external_dependency_descriptor,
            commands_file,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_folder(&self) -> &Path {
        self.root_folder.as_path()
    }

    /// Source folders relative to [`Self::root_folder`], in declaration order.
    pub fn source_folders(&self) -> &[String] {
        &self.source_folders
    }

    /// Source folders joined onto the root folder.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.source_folders
            .iter()
            .map(|folder| self.root_folder.join(folder))
            .collect()
    }

    /// Output folder per contributing project, owner included.
    pub fn output_folders(&self) -> &IndexMap<String, PathBuf> {
        &self.output_folders
    }

    pub fn archive_files(&self) -> &[PathBuf] {
        &self.archive_files
    }

    pub fn build_dependency_path(&self) -> Option<&str> {
        self.build_dependency_path.as_deref()
    }

    /// Projects whose output folders this project compiles against.
    pub fn dependent_project_names(&self) -> &[String] {
        &self.dependent_project_names
    }

    /// Referenced projects that declare their own dependency-manager container.
    pub fn transitive_build_dependency_projects(&self) -> &[String] {
        &self.transitive_build_dependency_projects
    }

    /// Absolute path of the dependency-manager descriptor, if any.
    pub fn external_dependency_descriptor(&self) -> Option<&Path> {
        self.external_dependency_descriptor.as_deref()
    }

    pub fn uses_external_dependency_manager(&self) -> bool {
        self.build_dependency_path.is_some()
    }

    pub fn commands_file(&self) -> Option<&Path> {
        self.commands_file.as_deref()
    }

    /// Compile classpath: output folders first, then archives.
    pub fn classpath(&self) -> Vec<PathBuf> {
        self.output_folders
            .values()
            .chain(self.archive_files.iter())
            .cloned()
            .collect()
    }
}
