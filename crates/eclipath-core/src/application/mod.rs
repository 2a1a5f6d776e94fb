//! Application layer for eclipath.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ClasspathResolver, CatalogSet)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer walks descriptors and caches snapshots, but the
//! classpath model itself lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    COMMANDS_FILENAME, CatalogSet, ClasspathResolver, ClasspathResolverBuilder, ResolverOptions,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, LibraryCatalog, ProjectRegistry, TestArchiveProvider};

pub use error::ApplicationError;
