//! Project registries: where projects live and what their descriptors say.

mod classpath_file;
mod memory;
mod repository;
mod workspace;

pub use classpath_file::{CLASSPATH_FILE, read_descriptor};
pub use memory::InMemoryRegistry;
pub use repository::{PROJECT_FILE, RepositoryRegistry};
pub use workspace::{PROJECTS_METADATA, WorkspaceRegistry};
