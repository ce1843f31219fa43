//! Error types for yanki-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, extracting or exporting entries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("top level of the document must be a mapping of entries")]
    NotAMapping,

    #[error("entry {entry:?} is missing required field {field:?}")]
    MissingField { entry: String, field: &'static str },

    #[error("entry {entry:?} has an invalid {field:?}: {reason}")]
    InvalidField {
        entry: String,
        field: &'static str,
        reason: &'static str,
    },

    #[error("output folder not found: {}", path.display())]
    OutputDir { path: PathBuf },

    #[error("decks {first:?} and {second:?} would both be written to {}", path.display())]
    FileNameCollision {
        first: String,
        second: String,
        path: PathBuf,
    },

    #[error("failed to write deck {deck:?}: {source}")]
    Package {
        deck: String,
        #[source]
        source: anki_package::PackageError,
    },
}
