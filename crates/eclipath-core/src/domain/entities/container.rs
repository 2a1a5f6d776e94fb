//! Classification of `con` entries.
//!
//! A container path is an opaque identifier such as
//! `org.eclipse.jdt.USER_LIBRARY/Utils`. The resolver only needs to know
//! which of a handful of families an identifier belongs to.

use crate::domain::error::DomainError;

/// Prefix of user library containers; the library name follows it.
pub const USER_LIBRARY_PREFIX: &str = "org.eclipse.jdt.USER_LIBRARY/";

/// Prefix of IvyDE containers; a query-like attribute list follows it.
pub const IVY_PREFIX: &str = "org.apache.ivyde.eclipse.cpcontainer.IVYDE_CONTAINER/";

/// Prefix of the JUnit 4 container.
pub const JUNIT4_PREFIX: &str = "org.eclipse.jdt.junit.JUNIT_CONTAINER/4";

/// Container ignored when no ignore-list is configured.
pub const JRE_CONTAINER: &str = "org.eclipse.jdt.launching.JRE_CONTAINER";

const IVY_XML_PATH_ATTRIBUTE: &str = "ivyXmlPath=";
const IVY_ATTRIBUTE_END: char = '&';

/// What a container identifier refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerRef<'a> {
    /// Listed in the ignore-list (platform runtime and the like).
    Ignored,
    /// A named user library.
    UserLibrary(&'a str),
    /// An external dependency manager container; holds the text after the prefix.
    ExternalDependency(&'a str),
    /// The built-in test framework.
    TestFramework,
    /// Anything else.
    Unknown,
}

impl<'a> ContainerRef<'a> {
    /// Classify `path` against the given ignore-list.
    ///
    /// Ignore-list entries are compared against the identifier up to its
    /// first `/`, so `JRE_CONTAINER/org.eclipse...StandardVMType/JavaSE-17`
    /// matches `JRE_CONTAINER`.
    pub fn classify<S: AsRef<str>>(path: &'a str, ignored: &[S]) -> Self {
        let head = path.split('/').next().unwrap_or(path);
        if ignored.iter().any(|i| i.as_ref() == head) {
            return Self::Ignored;
        }

        if let Some(library) = path.strip_prefix(USER_LIBRARY_PREFIX) {
            return Self::UserLibrary(library);
        }

        if let Some(attributes) = path.strip_prefix(IVY_PREFIX) {
            return Self::ExternalDependency(attributes);
        }

        if path.starts_with(JUNIT4_PREFIX) {
            return Self::TestFramework;
        }

        Self::Unknown
    }
}

/// Extract the `ivyXmlPath` value from the text following [`IVY_PREFIX`].
///
/// The value runs up to the next `&`, or to the end of the text.
pub fn external_descriptor_path(attributes: &str) -> Result<String, DomainError> {
    let start = attributes.find(IVY_XML_PATH_ATTRIBUTE).ok_or_else(|| {
        DomainError::MalformedExternalDependencyReference {
            reference: attributes.to_string(),
        }
    })?;

    let value = &attributes[start + IVY_XML_PATH_ATTRIBUTE.len()..];
    let end = value.find(IVY_ATTRIBUTE_END).unwrap_or(value.len());

    Ok(value[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_IGNORED: [&str; 1] = [JRE_CONTAINER];

    #[test]
    fn jre_with_vm_suffix_is_ignored() {
        let path = "org.eclipse.jdt.launching.JRE_CONTAINER/org.eclipse.jdt.internal.debug.ui.launcher.StandardVMType/JavaSE-17";
        assert_eq!(
            ContainerRef::classify(path, &DEFAULT_IGNORED),
            ContainerRef::Ignored
        );
    }

    #[test]
    fn user_library_name_is_extracted() {
        assert_eq!(
            ContainerRef::classify("org.eclipse.jdt.USER_LIBRARY/Utils", &DEFAULT_IGNORED),
            ContainerRef::UserLibrary("Utils")
        );
    }

    #[test]
    fn junit4_is_test_framework_but_junit5_is_unknown() {
        assert_eq!(
            ContainerRef::classify("org.eclipse.jdt.junit.JUNIT_CONTAINER/4", &DEFAULT_IGNORED),
            ContainerRef::TestFramework
        );
        assert_eq!(
            ContainerRef::classify("org.eclipse.jdt.junit.JUNIT_CONTAINER/5", &DEFAULT_IGNORED),
            ContainerRef::Unknown
        );
    }

    #[test]
    fn empty_ignore_list_keeps_jre_unknown() {
        let none: [&str; 0] = [];
        assert_eq!(
            ContainerRef::classify(JRE_CONTAINER, &none),
            ContainerRef::Unknown
        );
    }

    #[test]
    fn ivy_path_stops_at_ampersand() {
        let attributes = "?project=App&ivyXmlPath=foo.xml&confs=*";
        assert_eq!(external_descriptor_path(attributes).unwrap(), "foo.xml");
    }

    #[test]
    fn ivy_path_runs_to_end_without_ampersand() {
        assert_eq!(
            external_descriptor_path("?ivyXmlPath=deps/ivy.xml").unwrap(),
            "deps/ivy.xml"
        );
    }

    #[test]
    fn ivy_path_without_marker_is_malformed() {
        assert!(matches!(
            external_descriptor_path("?project=App&confs=*"),
            Err(DomainError::MalformedExternalDependencyReference { .. })
        ));
    }
}
