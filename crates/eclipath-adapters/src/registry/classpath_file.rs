//! `.classpath` descriptor parsing.
//!
//! ```xml
//! <classpath>
//!     <classpathentry kind="src" path="src"/>
//!     <classpathentry combineaccessrules="false" kind="src" path="/Lib"/>
//!     <classpathentry kind="con" path="org.eclipse.jdt.launching.JRE_CONTAINER"/>
//!     <classpathentry kind="output" path="bin"/>
//! </classpath>
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use eclipath_core::{
    application::ApplicationError,
    domain::{DependencyEntry, EntryKind, ProjectDescriptor},
    error::EclipathResult,
};

use crate::xml::read_xml;

/// Descriptor file name inside a project root.
pub const CLASSPATH_FILE: &str = ".classpath";

#[derive(Debug, Deserialize)]
struct ClasspathDocument {
    #[serde(rename = "classpathentry", default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "@kind")]
    kind: String,
    #[serde(rename = "@path")]
    path: String,
    #[serde(rename = "@combineaccessrules", default)]
    combine_access_rules: Option<String>,
}

/// Read `<root>/.classpath` of `project`.
///
/// Entries of kinds the resolver does not interpret (`lib`, `var`, ...)
/// are dropped here.
#[instrument(skip(root), fields(root = %root.display()))]
pub fn read_descriptor(project: &str, root: &Path) -> EclipathResult<ProjectDescriptor> {
    let path = root.join(CLASSPATH_FILE);
    if !path.is_file() {
        return Err(ApplicationError::MissingDescriptor {
            project: project.to_string(),
        }
        .into());
    }

    let document: ClasspathDocument = read_xml(&path)?;
    Ok(into_descriptor(project, document))
}

fn into_descriptor(project: &str, document: ClasspathDocument) -> ProjectDescriptor {
    document
        .entries
        .into_iter()
        .filter_map(|raw| match raw.kind.parse::<EntryKind>() {
            Ok(kind) => Some(DependencyEntry {
                kind,
                path: raw.path,
                combine_access_rules: raw.combine_access_rules,
            }),
            Err(_) => {
                debug!(project, kind = %raw.kind, path = %raw.path, "skipping classpath entry");
                None
            }
        })
        .collect()
}
