use std::collections::HashSet;
use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::domain::entities::common::CanonicalPath;

/// Mutable builder for one top-level resolution.
///
/// Owned by exactly one `resolve` call and frozen into a
/// [`ResolvedProject`](super::resolved::ResolvedProject) once the walk ends.
#[derive(Debug)]
pub struct DependencyAccumulator {
    owner: String,
    visited: HashSet<CanonicalPath>,
    output_folders: IndexMap<String, PathBuf>,
    archives: IndexSet<PathBuf>,
    build_dependency_path: Option<String>,
    projects_with_build_dependency: IndexSet<String>,
}

impl DependencyAccumulator {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            visited: HashSet::new(),
            output_folders: IndexMap::new(),
            archives: IndexSet::new(),
            build_dependency_path: None,
            projects_with_build_dependency: IndexSet::new(),
        }
    }

    pub fn is_owner(&self, project: &str) -> bool {
        self.owner == project
    }

    /// Record `root` as walked. Returns `false` if it was already walked.
    pub fn mark_visited(&mut self, root: &CanonicalPath) -> bool {
        self.visited.insert(root.clone())
    }

    /// Register the output folder of `project`; the first registration wins.
    pub fn add_output_folder(&mut self, project: impl Into<String>, folder: PathBuf) {
        let project = project.into();
        if let Some(existing) = self.output_folders.get(&project) {
            debug!(
                project = %project,
                kept = %existing.display(),
                ignored = %folder.display(),
                "project already has an output folder"
            );
            return;
        }
        self.output_folders.insert(project, folder);
    }

    pub fn add_archives<I>(&mut self, archives: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.archives.extend(archives);
    }

    /// Set the owner's dependency-manager descriptor. A second call overwrites.
    pub fn set_build_dependency_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        if let Some(previous) = &self.build_dependency_path {
            debug!(previous = %previous, path = %path, "build dependency path set twice");
        }
        self.build_dependency_path = Some(path);
    }

    pub fn add_project_with_build_dependency(&mut self, project: impl Into<String>) {
        self.projects_with_build_dependency.insert(project.into());
    }

    pub(crate) fn into_parts(self) -> AccumulatedParts {
        AccumulatedParts {
            owner: self.owner,
            output_folders: self.output_folders,
            archives: self.archives,
            build_dependency_path: self.build_dependency_path,
            projects_with_build_dependency: self.projects_with_build_dependency,
        }
    }
}

/// Everything a finished accumulator hands over to the snapshot.
pub(crate) struct AccumulatedParts {
    pub owner: String,
    pub output_folders: IndexMap<String, PathBuf>,
    pub archives: IndexSet<PathBuf>,
    pub build_dependency_path: Option<String>,
    pub projects_with_build_dependency: IndexSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visited_guard_reports_repeats() {
        let mut acc = DependencyAccumulator::new("App");
        let root = CanonicalPath::new("/repo/App");

        assert!(acc.mark_visited(&root));
        assert!(!acc.mark_visited(&CanonicalPath::new(r"/repo\App")));
        assert!(!acc.mark_visited(&root));
    }

    #[test]
    fn archives_are_deduplicated_in_first_insertion_order() {
        let mut acc = DependencyAccumulator::new("App");
        acc.add_archives([PathBuf::from("a.jar"), PathBuf::from("b.jar")]);
        acc.add_archives([PathBuf::from("b.jar"), PathBuf::from("c.jar")]);
        acc.add_archives([PathBuf::from("a.jar")]);

        let archives: Vec<_> = acc.into_parts().archives.into_iter().collect();
        assert_eq!(
            archives,
            [
                PathBuf::from("a.jar"),
                PathBuf::from("b.jar"),
                PathBuf::from("c.jar")
            ]
        );
    }

    #[test]
    fn first_output_folder_wins() {
        let mut acc = DependencyAccumulator::new("App");
        acc.add_output_folder("App", PathBuf::from("/repo/App/bin"));
        acc.add_output_folder("Lib", PathBuf::from("/repo/Lib/bin"));
        acc.add_output_folder("App", PathBuf::from("/repo/App/classes"));

        let folders = acc.into_parts().output_folders;
        let keys: Vec<_> = folders.keys().cloned().collect();
        assert_eq!(keys, ["App", "Lib"]);
        assert_eq!(folders["App"], PathBuf::from("/repo/App/bin"));
    }

    #[test]
    fn last_build_dependency_path_wins() {
        let mut acc = DependencyAccumulator::new("App");
        acc.set_build_dependency_path("ivy.xml");
        acc.set_build_dependency_path("other.xml");
        assert_eq!(
            acc.into_parts().build_dependency_path.as_deref(),
            Some("other.xml")
        );
    }

    #[test]
    fn owner_check_is_by_name() {
        let acc = DependencyAccumulator::new("App");
        assert!(acc.is_owner("App"));
        assert!(!acc.is_owner("Lib"));
        assert_eq!(acc.into_parts().owner, "App");
    }
}
