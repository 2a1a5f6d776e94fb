//! Dependency descriptor model.
//!
//! A descriptor is the parsed form of a project's `.classpath` file: an
//! ordered list of typed entries. Reading the file is an adapter concern;
//! the resolver only sees these values.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// The kind of a classpath entry.
///
/// Closed set: anything else in a descriptor is dropped by the registry
/// that parses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A logical group of archives (`kind="con"`).
    Container,
    /// A source folder or a reference to another project (`kind="src"`).
    Source,
    /// The compiled-classes folder (`kind="output"`).
    Output,
}

impl EntryKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Container => "con",
            Self::Source => "src",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "con" => Ok(Self::Container),
            "src" => Ok(Self::Source),
            "output" => Ok(Self::Output),
            other => Err(DomainError::InvalidEntryKind(other.to_string())),
        }
    }
}

/// One `classpathentry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub kind: EntryKind,
    pub path: String,
    /// Raw value of the `combineaccessrules` attribute, if present.
    pub combine_access_rules: Option<String>,
}

impl DependencyEntry {
    pub fn new(kind: EntryKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            combine_access_rules: None,
        }
    }

    pub fn container(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Container, path)
    }

    pub fn source(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Source, path)
    }

    pub fn output(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, path)
    }

    pub fn with_combine_access_rules(mut self, value: impl Into<String>) -> Self {
        self.combine_access_rules = Some(value.into());
        self
    }
}

/// Ordered entries of one project's descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    entries: Vec<DependencyEntry>,
}

impl ProjectDescriptor {
    pub fn new(entries: Vec<DependencyEntry>) -> Self {
        Self { entries }
    }

    pub fn with_entry(mut self, entry: DependencyEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[DependencyEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DependencyEntry> for ProjectDescriptor {
    fn from_iter<I: IntoIterator<Item = DependencyEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
