//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags ([`AppConfig::apply_args`])
//! 2. `ECLIPATH_*` environment variables (`__` separates nested keys)
//! 3. Config file (`--config`, or [`AppConfig::config_path`] when present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use eclipath_core::domain::{CatalogMode, JRE_CONTAINER};

use crate::cli::global::GlobalArgs;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How user libraries of several repositories are combined.
    pub catalog_mode: CatalogMode,
    /// Container identifiers that contribute nothing.
    pub ignored_containers: Vec<String>,
    /// Eclipse workspace used when no repository is configured.
    pub workspace: Option<PathBuf>,
    /// Repository checkouts scanned for projects.
    pub repositories: Vec<RepositoryConfig>,
    /// Where the JUnit container's archives come from.
    pub test_archives: TestArchivesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// One repository checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub path: PathBuf,
    /// Exported user libraries belonging to this repository.
    pub user_libraries: Option<PathBuf>,
    /// Project names not registered from this repository.
    pub ignore_projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestArchivesConfig {
    /// Folder holding the bundled JUnit archives. Unset disables the container.
    pub source_dir: Option<PathBuf>,
    pub cache_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_mode: CatalogMode::default(),
            ignored_containers: vec![JRE_CONTAINER.to_string()],
            workspace: None,
            repositories: Vec::new(),
            test_archives: TestArchivesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for TestArchivesConfig {
    fn default() -> Self {
        Self {
            source_dir: None,
            cache_dir: AppConfig::cache_dir().join("junit"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("ECLIPATH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Overlay command-line flags.
    ///
    /// `--repo` replaces the configured repositories; the n-th
    /// `--user-libraries` belongs to the n-th `--repo`.
    pub fn apply_args(&mut self, args: &GlobalArgs) {
        if !args.repos.is_empty() {
            let mut libraries = args.user_libraries.iter();
            self.repositories = args
                .repos
                .iter()
                .map(|path| RepositoryConfig {
                    path: path.clone(),
                    user_libraries: libraries.next().cloned(),
                    ignore_projects: Vec::new(),
                })
                .collect();
        }
        if let Some(workspace) = &args.workspace {
            self.workspace = Some(workspace.clone());
        }
        if args.isolated_catalogs {
            self.catalog_mode = CatalogMode::Isolated;
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.eclipath.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "eclipath", "eclipath")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".eclipath.toml"))
    }

    fn cache_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "eclipath", "eclipath")
            .map(|d| d.cache_dir().to_path_buf())
            .unwrap_or_else(|| Path::new(".eclipath").join("cache"))
    }
}
