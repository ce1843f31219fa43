//! Minimal writer for Anki `.apkg` packages.
//!
//! Provides:
//! - Note types (models) with fields and card templates
//! - Notes with stable guids and duplicate-detection checksums
//! - Decks and the SQLite collection they are stored in
//! - The zip package Anki imports

pub mod collection;
pub mod deck;
pub mod error;
pub mod hash;
pub mod model;
pub mod note;
pub mod package;
pub mod schema;

pub use collection::Collection;
pub use deck::Deck;
pub use error::{PackageError, Result};
pub use model::{Field, Model, Template};
pub use note::Note;
pub use package::Package;
