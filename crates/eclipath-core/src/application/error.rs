//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the collaborators
//! behind the ports. Descriptor-level problems are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while resolving projects.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The project has no dependency descriptor.
    #[error("Project '{project}' has no classpath descriptor")]
    MissingDescriptor { project: String },

    /// The registry does not know the project.
    #[error("Could not find folder for project '{project}'")]
    UnknownProject { project: String },

    /// Isolated catalog mode cannot pick a catalog for the project.
    #[error("Cannot choose a user library catalog for project '{project}': {catalogs} catalogs configured and its repository is unknown")]
    AmbiguousCatalog { project: String, catalogs: usize },

    /// Canonicalization or another filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A descriptor, project or catalog file could not be parsed.
    #[error("Could not parse {path}: {reason}")]
    DescriptorParse { path: PathBuf, reason: String },

    /// Resolution cache access failed (lock poisoned).
    #[error("Resolution cache error")]
    CacheLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingDescriptor { project } => vec![
                format!("Project '{}' has no .classpath file", project),
                "Check that it is a Java project".into(),
            ],
            Self::UnknownProject { project } => vec![
                format!("No .project file declares the name '{}'", project),
                "Try: eclipath projects to see the known projects".into(),
                "Add the repository holding it with --repo".into(),
            ],
            Self::AmbiguousCatalog { .. } => vec![
                "Several user library files are configured".into(),
                "Drop --isolated-catalogs to share libraries across repositories".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the folder exists and is readable".into(),
            ],
            Self::DescriptorParse { path, .. } => vec![
                format!("Malformed file: {}", path.display()),
                "Regenerate it from the IDE".into(),
            ],
            Self::CacheLockError => vec![
                "The resolution cache is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingDescriptor { .. } | Self::UnknownProject { .. } => ErrorCategory::NotFound,
            Self::AmbiguousCatalog { .. } => ErrorCategory::Configuration,
            Self::DescriptorParse { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::CacheLockError => ErrorCategory::Internal,
        }
    }
}
