pub mod accumulator;
pub mod common;
pub mod container;
pub mod descriptor;
pub mod resolved;

pub use crate::domain::DomainError;
pub use accumulator::DependencyAccumulator;
pub use descriptor::{DependencyEntry, EntryKind, ProjectDescriptor};
pub use resolved::ResolvedProject;
