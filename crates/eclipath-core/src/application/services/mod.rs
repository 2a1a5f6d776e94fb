//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve a project's classpath".

pub mod catalogs;
pub mod resolver;

pub use catalogs::CatalogSet;
pub use resolver::{ClasspathResolver, ClasspathResolverBuilder, COMMANDS_FILENAME, ResolverOptions};
