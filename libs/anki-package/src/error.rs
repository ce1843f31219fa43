//! Error types for anki-package.

use thiserror::Error;

/// Result type alias using PackageError.
pub type Result<T> = std::result::Result<T, PackageError>;

/// Errors that can occur while building or writing a package.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model {model} expects {expected} fields, note has {actual}")]
    FieldCount {
        model: String,
        expected: usize,
        actual: usize,
    },
}
