//! Catalog read from a workspace's JDT core preferences.
//!
//! The IDE stores each user library as a Java-properties entry whose key is
//! `org.eclipse.jdt.core.userLibrary.<name>` and whose value is an escaped
//! `<userlibrary>` XML document.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use eclipath_core::application::ports::{LibraryCatalog, ProjectRegistry};

use crate::{
    catalog::{resolve_archive, user_libraries::ArchiveElement},
    error::AdapterError,
    xml::parse_xml,
};

/// Preferences file holding user libraries, relative to the workspace.
pub const JDT_CORE_PREFS: &str =
    ".metadata/.plugins/org.eclipse.core.runtime/.settings/org.eclipse.jdt.core.prefs";

/// Property key prefix of a user library definition.
pub const USER_LIBRARY_KEY_PREFIX: &str = "org.eclipse.jdt.core.userLibrary.";

#[derive(Debug, Deserialize)]
struct UserLibraryDocument {
    #[serde(rename = "archive", default)]
    archives: Vec<ArchiveElement>,
}

/// User libraries defined in a workspace.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceUserLibraries {
    libraries: IndexMap<String, Vec<PathBuf>>,
}

impl WorkspaceUserLibraries {
    /// Read the user libraries of `workspace`.
    ///
    /// Entries whose XML cannot be parsed are skipped with a warning.
    #[instrument(skip_all, fields(workspace = %workspace.as_ref().display()))]
    pub fn load(
        workspace: impl AsRef<Path>,
        registry: Option<&dyn ProjectRegistry>,
    ) -> Result<Self, AdapterError> {
        let prefs = workspace.as_ref().join(JDT_CORE_PREFS);
        let raw = fs::read_to_string(&prefs).map_err(|source| AdapterError::Read {
            path: prefs.clone(),
            source,
        })?;
        Ok(Self::parse(&prefs, &raw, registry))
    }

    /// Build the catalog from the text of a preferences file.
    pub fn parse(prefs: &Path, raw: &str, registry: Option<&dyn ProjectRegistry>) -> Self {
        let mut libraries = IndexMap::new();

        for (key, value) in parse_properties(raw) {
            let Some(name) = key.strip_prefix(USER_LIBRARY_KEY_PREFIX) else {
                continue;
            };

            let document: UserLibraryDocument = match parse_xml(prefs, &value) {
                Ok(document) => document,
                Err(e) => {
                    warn!(library = name, error = %e, "skipping unreadable user library");
                    continue;
                }
            };

            let jars = document
                .archives
                .iter()
                .map(|archive| resolve_archive(&archive.path, registry))
                .collect();
            libraries.insert(name.to_string(), jars);
        }

        debug!(libraries = libraries.len(), "workspace user libraries loaded");
        Self { libraries }
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl LibraryCatalog for WorkspaceUserLibraries {
    fn jars_for(&self, library: &str) -> Option<Vec<PathBuf>> {
        self.libraries.get(library).cloned()
    }

    fn library_names(&self) -> Vec<String> {
        self.libraries.keys().cloned().collect()
    }
}

/// Key/value pairs of a Java properties file, in file order.
fn parse_properties(raw: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut logical = String::new();

    for line in raw.lines() {
        let line = line.trim_start();
        if logical.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        if ends_with_continuation(line) {
            logical.push_str(&line[..line.len() - 1]);
            continue;
        }

        logical.push_str(line);
        pairs.push(split_property(&logical));
        logical.clear();
    }

    if !logical.is_empty() {
        pairs.push(split_property(&logical));
    }
    pairs
}

/// `true` when the line ends in an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_property(line: &str) -> (String, String) {
    let mut escaped = false;
    let mut split = None;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' => {
                split = Some((i, c));
                break;
            }
            _ => {}
        }
    }

    let Some((i, separator)) = split else {
        return (unescape(line), String::new());
    };

    let key = &line[..i];
    let mut value = line[i + separator.len_utf8()..].trim_start();
    if separator.is_whitespace() {
        if let Some(rest) = value.strip_prefix(['=', ':']) {
            value = rest.trim_start();
        }
    }

    (unescape(key), unescape(value))
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRegistry;
    use tempfile::TempDir;

    const PREFS: &str = r#"eclipse.preferences.version=1
org.eclipse.jdt.core.compiler.source=17
org.eclipse.jdt.core.userLibrary.Utils=<?xml version\="1.0" encoding\="UTF-8"?>\r\n<userlibrary systemlibrary\="false" version\="2">\r\n\t<archive path\="/ThirdParty/lib/a.jar"/>\r\n\t<archive path\="C\:/jars/b.jar"/>\r\n</userlibrary>\r\n
org.eclipse.jdt.core.userLibrary.Broken=<userlibrary
"#;

    #[test]
    fn reads_user_library_entries() {
        let registry = InMemoryRegistry::new().with_project("ThirdParty", "/repo/third", []);
        let catalog = WorkspaceUserLibraries::parse(Path::new("prefs"), PREFS, Some(&registry));

        assert_eq!(catalog.library_names(), ["Utils"]);
        assert_eq!(
            catalog.jars_for("Utils"),
            Some(vec![
                PathBuf::from("/repo/third/lib/a.jar"),
                PathBuf::from("C:/jars/b.jar"),
            ])
        );
    }

    #[test]
    fn properties_unescape_and_continue_lines() {
        let pairs = parse_properties("# comment\n\nkey\\ one = a\\=b\\\n    c\nplain:\\u0041\\t\n");
        assert_eq!(
            pairs,
            [
                ("key one".to_string(), "a=bc".to_string()),
                ("plain".to_string(), "A\t".to_string()),
            ]
        );
    }

    #[test]
    fn loads_from_workspace_folder() {
        let workspace = TempDir::new().unwrap();
        let prefs = workspace.path().join(JDT_CORE_PREFS);
        std::fs::create_dir_all(prefs.parent().unwrap()).unwrap();
        std::fs::write(&prefs, PREFS).unwrap();

        let catalog = WorkspaceUserLibraries::load(workspace.path(), None).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.jars_for("Utils").unwrap()[0],
            PathBuf::from("/ThirdParty/lib/a.jar")
        );
    }

    #[test]
    fn missing_prefs_is_an_error() {
        let workspace = TempDir::new().unwrap();
        assert!(matches!(
            WorkspaceUserLibraries::load(workspace.path(), None),
            Err(AdapterError::Read { .. })
        ));
    }
}
