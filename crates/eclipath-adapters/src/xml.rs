//! Shared XML loading on top of `quick-xml`'s serde support.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::AdapterError;

/// Read `path` and deserialize its root element into `T`.
pub(crate) fn read_xml<T: DeserializeOwned>(path: &Path) -> Result<T, AdapterError> {
    let raw = fs::read_to_string(path).map_err(|source| AdapterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_xml(path, &raw)
}

/// Deserialize `raw`, reporting errors against `path`.
pub(crate) fn parse_xml<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, AdapterError> {
    quick_xml::de::from_str(raw).map_err(|source| AdapterError::Xml {
        path: path.to_path_buf(),
        source,
    })
}
