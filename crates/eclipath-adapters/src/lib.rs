//! Infrastructure adapters for eclipath.
//!
//! This crate implements the ports defined in `eclipath-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod error;
pub mod filesystem;
pub mod registry;
pub mod test_archives;
mod xml;

// Re-export commonly used adapters
pub use catalog::{InMemoryCatalog, UserLibrariesFile, WorkspaceUserLibraries};
pub use error::AdapterError;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::{InMemoryRegistry, RepositoryRegistry, WorkspaceRegistry};
pub use test_archives::LocalTestArchives;
