// ============================================================================
// domain/error.rs - DESCRIPTOR AND CLASSPATH ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the resolver caches nothing but successes, callers may retry)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Structural Errors (fatal for the resolution)
    // ========================================================================
    #[error("could not find 'ivyXmlPath=' in dependency-manager container '{reference}'")]
    MalformedExternalDependencyReference { reference: String },

    #[error("unknown classpath entry kind '{0}'")]
    InvalidEntryKind(String),

    // ========================================================================
    // Recoverable Problems (logged as warnings, never returned by the resolver)
    // ========================================================================
    #[error("user library '{library}' referenced by project '{project}' could not be resolved")]
    UnresolvedUserLibrary { project: String, library: String },

    #[error("does not know how to interpret container '{container}' in project '{project}'")]
    UnknownContainerKind { project: String, container: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedExternalDependencyReference { reference } => vec![
                format!("Container path: {}", reference),
                "The IvyDE container must carry an 'ivyXmlPath=<file>' attribute".into(),
                "Re-create the Ivy container from the IDE to regenerate .classpath".into(),
            ],
            Self::InvalidEntryKind(kind) => vec![
                format!("Entry kind '{}' is not one of: con, src, output", kind),
            ],
            Self::UnresolvedUserLibrary { library, .. } => vec![
                format!("Export the user library '{}' from the IDE", library),
                "Pass the exported file with --user-libraries".into(),
            ],
            Self::UnknownContainerKind { .. } => {
                vec!["The container is skipped; its jars will be missing from the classpath".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedExternalDependencyReference { .. }
            | Self::InvalidEntryKind(_)
            | Self::UnknownContainerKind { .. } => ErrorCategory::Validation,
            Self::UnresolvedUserLibrary { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
