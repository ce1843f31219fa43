//! `.apkg` output: a zip holding the collection database and a media manifest.

use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::collection::Collection;
use crate::deck::Deck;
use crate::error::Result;
use crate::model::Model;

/// Name of the collection database inside the archive.
pub const COLLECTION_ENTRY: &str = "collection.anki2";

/// Name of the media manifest inside the archive.
pub const MEDIA_ENTRY: &str = "media";

/// A single deck together with the model its notes use.
pub struct Package<'a> {
    model: &'a Model,
    deck: &'a Deck,
}

impl<'a> Package<'a> {
    pub fn new(model: &'a Model, deck: &'a Deck) -> Self {
        Self { model, deck }
    }

    /// Write the package to path, replacing any existing file.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_to_file_at(path, Utc::now())
    }

    /// Write the package using the given time for timestamps and note/card ids.
    pub fn write_to_file_at<P: AsRef<Path>>(&self, path: P, now: DateTime<Utc>) -> Result<()> {
        let path = path.as_ref();
        let scratch = tempfile::NamedTempFile::new()?;

        // Connection must be closed before the database file is copied.
        {
            let collection = Collection::create(scratch.path(), now)?;
            collection.write_deck(self.model, self.deck, now)?;
        }

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(File::create(path)?);

        zip.start_file(COLLECTION_ENTRY, options)?;
        io::copy(&mut File::open(scratch.path())?, &mut zip)?;

        zip.start_file(MEDIA_ENTRY, options)?;
        zip.write_all(b"{}")?;

        zip.finish()?;

        tracing::debug!(
            deck = %self.deck.name,
            notes = self.deck.notes().len(),
            path = %path.display(),
            "package written"
        );
        Ok(())
    }
}
