//! Integration tests for eclipath-core through its public API only.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use eclipath_core::{
    application::ApplicationError,
    prelude::*,
};

struct StaticRegistry {
    projects: HashMap<&'static str, Vec<DependencyEntry>>,
}

impl ProjectRegistry for StaticRegistry {
    fn project_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.projects.keys().map(|n| n.to_string()).collect();
        names.sort();
        names
    }

    fn project_root_folder(&self, name: &str) -> EclipathResult<PathBuf> {
        if self.projects.contains_key(name) {
            Ok(PathBuf::from("/repo").join(name))
        } else {
            Err(ApplicationError::UnknownProject {
                project: name.to_string(),
            }
            .into())
        }
    }

    fn project_descriptor(&self, name: &str) -> EclipathResult<ProjectDescriptor> {
        self.projects
            .get(name)
            .map(|entries| entries.iter().cloned().collect())
            .ok_or_else(|| {
                ApplicationError::MissingDescriptor {
                    project: name.to_string(),
                }
                .into()
            })
    }

    fn repository_of(&self, _name: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/repo"))
    }
}

struct LexicalFilesystem;

impl Filesystem for LexicalFilesystem {
    fn canonicalize(&self, path: &Path) -> EclipathResult<PathBuf> {
        Ok(path.to_path_buf())
    }

    fn is_file(&self, _path: &Path) -> bool {
        false
    }

    fn exists(&self, _path: &Path) -> bool {
        true
    }
}

struct OneLibrary;

impl LibraryCatalog for OneLibrary {
    fn jars_for(&self, library: &str) -> Option<Vec<PathBuf>> {
        (library == "Utils").then(|| vec![PathBuf::from("/jars/a.jar"), PathBuf::from("/jars/b.jar")])
    }

    fn library_names(&self) -> Vec<String> {
        vec!["Utils".into()]
    }
}

fn app_and_lib() -> ClasspathResolver {
    let mut projects = HashMap::new();
    projects.insert(
        "App",
        vec![
            DependencyEntry::source("src"),
            DependencyEntry::source("/Lib").with_combine_access_rules("false"),
            DependencyEntry::container("org.eclipse.jdt.launching.JRE_CONTAINER"),
            DependencyEntry::container(
                "org.apache.ivyde.eclipse.cpcontainer.IVYDE_CONTAINER/?project=App&ivyXmlPath=foo.xml&confs=*",
            ),
            DependencyEntry::output("bin"),
        ],
    );
    projects.insert(
        "Lib",
        vec![
            DependencyEntry::source("src"),
            DependencyEntry::container("org.eclipse.jdt.USER_LIBRARY/Utils"),
            DependencyEntry::output("bin"),
        ],
    );

    ClasspathResolver::builder(
        Box::new(StaticRegistry { projects }),
        Box::new(LexicalFilesystem),
    )
    .catalog_mode(CatalogMode::Isolated)
    .catalog("/repo", Arc::new(OneLibrary))
    .build()
}

#[test]
fn resolves_app_with_library_project() {
    let resolver = app_and_lib();
    let app = resolver.resolve("App").unwrap();

    assert_eq!(app.source_folders(), ["src"]);
    assert_eq!(
        app.classpath(),
        [
            PathBuf::from("/repo/Lib/bin"),
            PathBuf::from("/repo/App/bin"),
            PathBuf::from("/jars/a.jar"),
            PathBuf::from("/jars/b.jar"),
        ]
    );
    assert_eq!(app.dependent_project_names(), ["Lib"]);
    assert_eq!(app.build_dependency_path(), Some("foo.xml"));
    assert!(resolver.uses_external_dependency_manager().unwrap());
}

#[test]
fn dependent_projects_from_the_library_side() {
    let resolver = app_and_lib();
    let deps: Vec<String> = resolver.dependent_projects_of("Lib").unwrap().into_iter().collect();
    assert_eq!(deps, ["Lib"]);

    let deps: Vec<String> = resolver.dependent_projects_of("/App").unwrap().into_iter().collect();
    assert_eq!(deps, ["App", "Lib"]);
}

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = Arc::new(app_and_lib());

    let handles: Vec<_> = ["App", "Lib", "App", "Lib"]
        .into_iter()
        .map(|name| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || resolver.resolve(name).map(|r| r.name().to_string()))
        })
        .collect();

    for handle in handles {
        let name = handle.join().unwrap().unwrap();
        assert!(name == "App" || name == "Lib");
    }
    assert!(Arc::ptr_eq(
        &resolver.resolve("App").unwrap(),
        &resolver.resolve("App").unwrap()
    ));
}

#[test]
fn snapshot_serializes_to_json() {
    let resolver = app_and_lib();
    let app = resolver.resolve("App").unwrap();
    let json = serde_json::to_value(app.as_ref()).unwrap();

    assert_eq!(json["name"], "App");
    assert_eq!(json["root_folder"], "/repo/App");
    assert_eq!(json["dependent_project_names"][0], "Lib");
}
