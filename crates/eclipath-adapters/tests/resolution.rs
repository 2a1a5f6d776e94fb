//! End-to-end resolution behaviour through the adapters.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use eclipath_adapters::{
    InMemoryCatalog, InMemoryRegistry, LocalFilesystem, MemoryFilesystem, RepositoryRegistry,
    UserLibrariesFile,
};
use eclipath_core::prelude::*;
use tempfile::TempDir;

const IVY_FOO: &str =
    "org.apache.ivyde.eclipse.cpcontainer.IVYDE_CONTAINER/?project=App&ivyXmlPath=foo.xml&confs=*";

fn reference(project: &str) -> DependencyEntry {
    DependencyEntry::source(format!("/{}", project)).with_combine_access_rules("false")
}

fn filesystem_for(registry: &InMemoryRegistry) -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    for name in registry.project_names() {
        fs.add_dir(registry.project_root_folder(&name).unwrap());
    }
    fs
}

fn resolver_for(registry: &InMemoryRegistry) -> ClasspathResolver {
    ClasspathResolver::new(
        Box::new(registry.clone()),
        Box::new(filesystem_for(registry)),
    )
}

#[test]
fn resolving_twice_walks_once() {
    let registry = InMemoryRegistry::new()
        .with_project("App", "/ws/App", [reference("Lib"), DependencyEntry::output("bin")])
        .with_project("Lib", "/ws/Lib", [DependencyEntry::output("bin")]);
    let resolver = resolver_for(&registry);

    let first = resolver.resolve("App").unwrap();
    let second = resolver.resolve("App").unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.descriptor_reads("App"), 1);
    assert_eq!(registry.descriptor_reads("Lib"), 1);
}

#[test]
fn cyclic_references_terminate() {
    let registry = InMemoryRegistry::new()
        .with_project("A", "/ws/A", [reference("B"), DependencyEntry::output("bin")])
        .with_project("B", "/ws/B", [reference("A"), DependencyEntry::output("bin")]);
    let resolver = resolver_for(&registry);

    let a = resolver.resolve("A").unwrap();
    assert_eq!(a.output_folders().len(), 2);

    let dependents: Vec<String> = resolver.dependent_projects_of("A").unwrap().into_iter().collect();
    assert_eq!(dependents, ["A", "B"]);
}

#[test]
fn diamond_contributes_each_output_folder_once() {
    let registry = InMemoryRegistry::new()
        .with_project(
            "App",
            "/ws/App",
            [reference("Lib"), reference("Util"), DependencyEntry::output("bin")],
        )
        .with_project("Lib", "/ws/Lib", [reference("Util"), DependencyEntry::output("bin")])
        .with_project("Util", "/ws/Util", [DependencyEntry::output("classes")]);
    let app = resolver_for(&registry).resolve("App").unwrap();

    let outputs: Vec<(&str, &Path)> = app
        .output_folders()
        .iter()
        .map(|(name, folder)| (name.as_str(), folder.as_path()))
        .collect();
    assert_eq!(
        outputs,
        [
            ("Util", Path::new("/ws/Util/classes")),
            ("Lib", Path::new("/ws/Lib/bin")),
            ("App", Path::new("/ws/App/bin")),
        ]
    );
    assert_eq!(registry.descriptor_reads("Util"), 1);
}

#[test]
fn overlapping_libraries_add_each_archive_once() {
    let registry = InMemoryRegistry::new().with_project(
        "App",
        "/ws/App",
        [
            DependencyEntry::container("org.eclipse.jdt.USER_LIBRARY/Utils"),
            DependencyEntry::container("org.eclipse.jdt.USER_LIBRARY/More"),
        ],
    );
    let catalog = InMemoryCatalog::new()
        .with_library("Utils", ["a.jar", "b.jar"])
        .with_library("More", ["b.jar", "c.jar"]);

    let resolver = ClasspathResolver::builder(
        Box::new(registry.clone()),
        Box::new(filesystem_for(&registry)),
    )
    .catalog("/ws", Arc::new(catalog))
    .build();

    let app = resolver.resolve("App").unwrap();
    assert_eq!(
        app.archive_files(),
        [PathBuf::from("a.jar"), PathBuf::from("b.jar"), PathBuf::from("c.jar")]
    );
}

#[test]
fn ignored_container_contributes_nothing() {
    let registry = InMemoryRegistry::new().with_project(
        "App",
        "/ws/App",
        [DependencyEntry::container(
            "org.eclipse.jdt.launching.JRE_CONTAINER/org.eclipse.jdt.internal.debug.ui.launcher.StandardVMType/JavaSE-17",
        )],
    );
    let app = resolver_for(&registry).resolve("App").unwrap();

    assert!(app.archive_files().is_empty());
    assert!(app.classpath().is_empty());
}

#[test]
fn user_library_resolution() {
    let registry = InMemoryRegistry::new().with_project(
        "App",
        "/ws/App",
        [
            DependencyEntry::container("org.eclipse.jdt.USER_LIBRARY/Utils"),
            DependencyEntry::container("org.eclipse.jdt.USER_LIBRARY/Unknown"),
        ],
    );
    let resolver = ClasspathResolver::builder(
        Box::new(registry.clone()),
        Box::new(filesystem_for(&registry)),
    )
    .catalog("/ws", Arc::new(InMemoryCatalog::new().with_library("Utils", ["a.jar", "b.jar"])))
    .build();

    let app = resolver.resolve("App").unwrap();
    assert_eq!(app.archive_files(), [PathBuf::from("a.jar"), PathBuf::from("b.jar")]);
}

#[test]
fn isolated_catalogs_follow_the_repository() {
    let registry = InMemoryRegistry::new()
        .with_project(
            "App",
            "/repo-a/App",
            [
                DependencyEntry::container("org.eclipse.jdt.USER_LIBRARY/Utils"),
                reference("Tool"),
            ],
        )
        .with_project(
            "Tool",
            "/repo-b/Tool",
            [DependencyEntry::container("org.eclipse.jdt.USER_LIBRARY/Utils")],
        )
        .in_repository("App", "/repo-a")
        .in_repository("Tool", "/repo-b");

    let resolver = ClasspathResolver::builder(
        Box::new(registry.clone()),
        Box::new(filesystem_for(&registry)),
    )
    .catalog_mode(CatalogMode::Isolated)
    .catalog("/repo-a", Arc::new(InMemoryCatalog::new().with_library("Utils", ["a/utils.jar"])))
    .catalog("/repo-b", Arc::new(InMemoryCatalog::new().with_library("Utils", ["b/utils.jar"])))
    .build();

    let app = resolver.resolve("App").unwrap();
    assert_eq!(
        app.archive_files(),
        [PathBuf::from("a/utils.jar"), PathBuf::from("b/utils.jar")]
    );
}

#[test]
fn external_dependency_ownership() {
    let registry = InMemoryRegistry::new()
        .with_project("App", "/ws/App", [DependencyEntry::container(IVY_FOO), reference("B")])
        .with_project(
            "B",
            "/ws/B",
            [
                DependencyEntry::container(
                    "org.apache.ivyde.eclipse.cpcontainer.IVYDE_CONTAINER/?project=B&ivyXmlPath=b.xml",
                ),
                DependencyEntry::output("bin"),
            ],
        );
    let app = resolver_for(&registry).resolve("App").unwrap();

    assert_eq!(app.build_dependency_path(), Some("foo.xml"));
    assert_eq!(app.transitive_build_dependency_projects(), ["B"]);
    assert_eq!(
        app.external_dependency_descriptor(),
        Some(Path::new("/ws/App/foo.xml"))
    );
}

#[test]
fn app_and_lib_end_to_end() {
    let registry = InMemoryRegistry::new()
        .with_project(
            "App",
            "/ws/App",
            // `/Lib` without a combineaccessrules attribute.
            [
                DependencyEntry::source("src"),
                DependencyEntry::source("/Lib"),
                DependencyEntry::output("bin"),
            ],
        )
        .with_project("Lib", "/ws/Lib", [DependencyEntry::output("bin")]);
    let app = resolver_for(&registry).resolve("App").unwrap();

    assert_eq!(app.source_folders(), ["src"]);
    assert_eq!(app.output_folders().len(), 2);
    assert_eq!(app.output_folders()["App"], PathBuf::from("/ws/App/bin"));
    assert_eq!(app.output_folders()["Lib"], PathBuf::from("/ws/Lib/bin"));
    assert_eq!(app.dependent_project_names(), ["Lib"]);
    assert_eq!(app.source_paths(), [PathBuf::from("/ws/App/src")]);
}

#[test]
fn on_disk_repository_with_exported_libraries() {
    let repo = TempDir::new().unwrap();
    let root = repo.path();

    let project = |folder: &str, name: &str, classpath: &str| {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(".project"),
            format!("<projectDescription><name>{}</name></projectDescription>", name),
        )
        .unwrap();
        fs::write(dir.join(".classpath"), classpath).unwrap();
    };

    project(
        "app",
        "App",
        r#"<classpath>
            <classpathentry kind="src" path="src"/>
            <classpathentry kind="src" path="/Lib"/>
            <classpathentry kind="con" path="org.eclipse.jdt.launching.JRE_CONTAINER"/>
            <classpathentry kind="con" path="org.eclipse.jdt.USER_LIBRARY/Utils"/>
            <classpathentry kind="output" path="bin"/>
        </classpath>"#,
    );
    project(
        "lib",
        "Lib",
        r#"<classpath>
            <classpathentry kind="src" path="src"/>
            <classpathentry kind="output" path="bin"/>
        </classpath>"#,
    );
    project("jars", "ThirdParty", "<classpath/>");
    fs::write(root.join("app").join("commands.build"), "ant jar").unwrap();

    let libraries = root.join("repo.userlibraries");
    fs::write(
        &libraries,
        r#"<eclipse-userlibraries version="2">
            <library name="Utils" systemlibrary="false">
                <archive path="/ThirdParty/utils.jar"/>
            </library>
        </eclipse-userlibraries>"#,
    )
    .unwrap();

    let registry = RepositoryRegistry::from_repository(root).unwrap();
    let catalog = UserLibrariesFile::load(&libraries, Some(&registry)).unwrap();
    let resolver = ClasspathResolver::builder(Box::new(registry), Box::new(LocalFilesystem::new()))
        .catalog(root, Arc::new(catalog))
        .build();

    let app = resolver.resolve("App").unwrap();
    let canonical_root = fs::canonicalize(root).unwrap();

    assert_eq!(app.root_folder(), canonical_root.join("app"));
    assert_eq!(app.source_folders(), ["src"]);
    assert_eq!(app.dependent_project_names(), ["Lib"]);
    assert_eq!(app.archive_files(), [root.join("jars").join("utils.jar")]);
    assert_eq!(
        app.commands_file(),
        Some(canonical_root.join("app").join("commands.build").as_path())
    );
    assert!(!resolver.uses_external_dependency_manager().unwrap());
}
