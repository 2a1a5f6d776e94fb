//! Adapter-level errors.
//!
//! Loaders report these while reading files; they surface to callers as
//! [`ApplicationError`] variants through `From`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use eclipath_core::{application::ApplicationError, error::EclipathError};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{path}': {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("invalid '{path}': {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("directory walk error under '{root}': {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl AdapterError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Xml { path, .. }
            | Self::Invalid { path, .. } => path,
            Self::Walk { root, .. } => root,
        }
    }
}

impl From<AdapterError> for ApplicationError {
    fn from(e: AdapterError) -> Self {
        let path = e.path().clone();
        match e {
            AdapterError::Read { source, .. } | AdapterError::Write { source, .. } => {
                ApplicationError::FilesystemError {
                    path,
                    reason: source.to_string(),
                }
            }
            AdapterError::Walk { source, .. } => ApplicationError::FilesystemError {
                path,
                reason: source.to_string(),
            },
            AdapterError::Xml { source, .. } => ApplicationError::DescriptorParse {
                path,
                reason: source.to_string(),
            },
            AdapterError::Invalid { message, .. } => ApplicationError::DescriptorParse {
                path,
                reason: message,
            },
        }
    }
}

impl From<AdapterError> for EclipathError {
    fn from(e: AdapterError) -> Self {
        EclipathError::Application(e.into())
    }
}
