//! Reading the YAML entry file.
//!
//! # Format
//! ```yaml
//! perro:
//!   language: es
//!   meaning: dog
//! correr:
//!   language: es
//!   type: verb
//!   meaning: to run
//! ```

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load and parse the file at path into its top-level mapping.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mapping> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mapping = parse(&content)?;
    tracing::debug!(path = %path.display(), entries = mapping.len(), "loaded entries");
    Ok(mapping)
}

/// Parse YAML text into its top-level mapping.
///
/// An empty (or comment-only) document is an empty mapping.
pub fn parse(content: &str) -> Result<Mapping> {
    if is_blank_document(content) {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(Error::NotAMapping),
    }
}

fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}
