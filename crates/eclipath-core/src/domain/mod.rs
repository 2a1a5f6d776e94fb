// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for eclipath.
//!
//! This module contains the classpath model with no I/O. Reading descriptors,
//! canonicalizing folders and looking up user libraries are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable snapshots**: `ResolvedProject` is never mutated once built
//! - **One mutable builder**: `DependencyAccumulator`, scoped to one resolution
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    accumulator::DependencyAccumulator,
    common::{CanonicalPath, normalize_separators, project_name_from_reference},
    container::{
        ContainerRef, IVY_PREFIX, JRE_CONTAINER, JUNIT4_PREFIX, USER_LIBRARY_PREFIX,
        external_descriptor_path,
    },
    descriptor::{DependencyEntry, EntryKind, ProjectDescriptor},
    resolved::ResolvedProject,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::CatalogMode;
