//! Document I/O error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a model document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a well-formed document.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document holds a different model than the loader expects.
    #[error("{path} is not a {expected} document (model is '{actual}')")]
    WrongModel {
        path: PathBuf,
        expected: &'static str,
        actual: String,
    },
}

/// Errors that can occur while saving a model document.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The path could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model could not be serialized.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}
