//! Error types for data file loading.

use thiserror::Error;

/// Errors that can occur when loading RON data files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File or directory could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A definition refers to an id that no registry knows about.
    #[error("Unknown {kind} '{id}' referenced by '{referenced_by}'")]
    UnknownReference {
        kind: &'static str,
        id: String,
        referenced_by: String,
    },
}
