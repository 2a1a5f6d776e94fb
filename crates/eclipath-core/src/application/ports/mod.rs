//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `eclipath-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProjectRegistry`: project folders and descriptors
//!   - `LibraryCatalog`: named user libraries
//!   - `TestArchiveProvider`: archives of the test-framework container
//!   - `Filesystem`: canonicalization and existence checks
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, LibraryCatalog, ProjectRegistry, TestArchiveProvider};

#[cfg(test)]
pub use output::{MockFilesystem, MockLibraryCatalog, MockProjectRegistry, MockTestArchiveProvider};
