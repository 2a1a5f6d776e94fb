//! Assembles a [`ClasspathResolver`] from the loaded configuration.
//!
//! Repositories take precedence over a workspace as the project source.  A
//! configured workspace still contributes its user libraries when
//! repositories are present.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use eclipath_adapters::{
    LocalFilesystem, LocalTestArchives, RepositoryRegistry, UserLibrariesFile, WorkspaceRegistry,
    WorkspaceUserLibraries, catalog::JDT_CORE_PREFS,
};
use eclipath_core::application::{ClasspathResolver, ResolverOptions, ports::ProjectRegistry};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Build the resolver described by `config`.
#[instrument(skip_all, fields(repositories = config.repositories.len()))]
pub fn build_resolver(config: &AppConfig) -> CliResult<ClasspathResolver> {
    let mut builder = if !config.repositories.is_empty() {
        let registry = scan_repositories(config)?;

        let mut catalogs = Vec::new();
        for repository in &config.repositories {
            if let Some(file) = &repository.user_libraries {
                let catalog = UserLibrariesFile::load(file, Some(&registry))?;
                debug!(file = %file.display(), libraries = catalog.len(), "user libraries loaded");
                catalogs.push((repository.path.clone(), catalog));
            }
        }
        let workspace_libraries = match &config.workspace {
            Some(workspace) => load_workspace_libraries(workspace, &registry)?,
            None => None,
        };

        let mut builder = ClasspathResolver::builder(
            Box::new(registry),
            Box::new(LocalFilesystem::new()),
        );
        for (repository, catalog) in catalogs {
            builder = builder.catalog(repository, Arc::new(catalog));
        }
        if let (Some(workspace), Some(catalog)) = (&config.workspace, workspace_libraries) {
            builder = builder.catalog(workspace.clone(), Arc::new(catalog));
        }
        builder
    } else if let Some(workspace) = &config.workspace {
        let registry = WorkspaceRegistry::open(workspace)?;
        info!(
            workspace = %workspace.display(),
            projects = registry.len(),
            "Using Eclipse workspace"
        );
        let libraries = load_workspace_libraries(workspace, &registry)?;

        let mut builder = ClasspathResolver::builder(
            Box::new(registry),
            Box::new(LocalFilesystem::new()),
        );
        if let Some(catalog) = libraries {
            builder = builder.catalog(workspace.clone(), Arc::new(catalog));
        }
        builder
    } else {
        return Err(CliError::NoProjectSource);
    };

    builder = builder
        .catalog_mode(config.catalog_mode)
        .options(ResolverOptions {
            ignored_containers: config.ignored_containers.clone(),
            ..ResolverOptions::default()
        });

    if let Some(source_dir) = &config.test_archives.source_dir {
        builder = builder.test_archives(Box::new(LocalTestArchives::new(
            source_dir,
            &config.test_archives.cache_dir,
        )));
    }

    Ok(builder.build())
}

fn scan_repositories(config: &AppConfig) -> CliResult<RepositoryRegistry> {
    let mut registry = RepositoryRegistry::new();
    for repository in &config.repositories {
        let ignored: HashSet<String> = repository.ignore_projects.iter().cloned().collect();
        let added = registry.add_repository(&repository.path, &ignored)?;
        info!(
            repository = %repository.path.display(),
            projects = added,
            "Scanned repository"
        );
    }
    Ok(registry)
}

/// Workspace user libraries, or `None` when the workspace has no JDT prefs.
fn load_workspace_libraries(
    workspace: &Path,
    registry: &dyn ProjectRegistry,
) -> CliResult<Option<WorkspaceUserLibraries>> {
    if !workspace.join(JDT_CORE_PREFS).is_file() {
        debug!(workspace = %workspace.display(), "no user libraries in workspace");
        return Ok(None);
    }
    Ok(Some(WorkspaceUserLibraries::load(workspace, Some(registry))?))
}
