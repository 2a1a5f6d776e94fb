//! Eclipath Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for eclipath, a
//! resolver of IDE project classpaths, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           eclipath-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ClasspathResolver, CatalogSet)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Registry, Catalog, Filesystem, Tests)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    eclipath-adapters (Infrastructure)   │
//! │ (RepositoryRegistry, LocalFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectDescriptor, ResolvedProject)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eclipath_core::prelude::*;
//!
//! // Adapters are injected; see eclipath-adapters for implementations.
//! let resolver = ClasspathResolver::builder(registry, filesystem)
//!     .catalog("/repos/core", catalog)
//!     .build();
//!
//! let app = resolver.resolve("App").unwrap();
//! for entry in app.classpath() {
//!     println!("{}", entry.display());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogSet, ClasspathResolver, ClasspathResolverBuilder, ResolverOptions,
        ports::{Filesystem, LibraryCatalog, ProjectRegistry, TestArchiveProvider},
    };
    pub use crate::domain::{
        CanonicalPath, CatalogMode, ContainerRef, DependencyEntry, EntryKind, ProjectDescriptor,
        ResolvedProject,
    };
    pub use crate::error::{EclipathError, EclipathResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
