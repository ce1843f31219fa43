//! Conversion of YAML vocabulary files into Anki decks.
//!
//! Provides:
//! - Loader for the YAML entry file
//! - Entry extraction with category/language grouping keys
//! - Stable group-by into decks
//! - Package export with an injectable identifier source

pub mod error;
pub mod exporter;
pub mod extractor;
pub mod grouper;
pub mod loader;
pub mod types;

pub use error::{Error, Result};
pub use exporter::{card_template, Exporter, IdSource, RandomIds, ID_RANGE};
pub use extractor::{extract, extract_all};
pub use grouper::group_entries;
pub use loader::load;
pub use types::{Deck, Entry, GroupKey};

use std::path::Path;

/// Load the file at path and group its entries into decks.
pub fn plan<P: AsRef<Path>>(path: P) -> Result<Vec<Deck>> {
    let mapping = load(path)?;
    let entries = extract_all(&mapping)?;
    Ok(group_entries(entries))
}
