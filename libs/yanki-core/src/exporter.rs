//! Writing decks as Anki packages.

use anki_package::{Field, Model, Note, Package, Template};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::Deck;

/// Range deck and model identifiers are drawn from.
pub const ID_RANGE: Range<i64> = (1 << 30)..(1 << 31);

/// File extension of written packages.
pub const PACKAGE_EXTENSION: &str = "apkg";

/// Source of deck and model identifiers.
pub trait IdSource {
    /// Next identifier, within [`ID_RANGE`].
    fn next_id(&mut self) -> i64;
}

/// Identifiers drawn uniformly from [`ID_RANGE`].
pub struct RandomIds<R> {
    rng: R,
}

impl<R: Rng> RandomIds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomIds<StdRng> {
    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IdSource for RandomIds<R> {
    fn next_id(&mut self) -> i64 {
        self.rng.random_range(ID_RANGE)
    }
}

/// The two-way card template shared by every deck of a run.
pub fn card_template<S: IdSource + ?Sized>(ids: &mut S) -> Model {
    Model::new(
        ids.next_id(),
        "Generic model",
        vec![Field::new("Question"), Field::new("Answer")],
        vec![
            Template::new("Card I")
                .qfmt("{{Question}}")
                .afmt("{{Answer}}"),
            Template::new("Card II")
                .qfmt("{{Answer}}")
                .afmt("{{Question}}"),
        ],
    )
}

/// Writes decks into an output directory.
pub struct Exporter {
    model: Model,
    output_dir: PathBuf,
}

impl Exporter {
    /// Fails if `output_dir` is not an existing directory.
    pub fn new(model: Model, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        if !output_dir.is_dir() {
            return Err(Error::OutputDir { path: output_dir });
        }
        Ok(Self { model, output_dir })
    }

    /// Where the package for a deck name is written.
    ///
    /// The file always lands directly inside the output directory, and
    /// distinct deck names always get distinct file names.
    pub fn package_path(&self, deck_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", file_stem(deck_name), PACKAGE_EXTENSION))
    }

    /// Write one deck, drawing its identifier from `ids`.
    pub fn export_deck<S: IdSource + ?Sized>(&self, deck: &Deck, ids: &mut S) -> Result<PathBuf> {
        let package_error = |source| Error::Package {
            deck: deck.name.clone(),
            source,
        };

        let mut out_deck = anki_package::Deck::new(ids.next_id(), deck.name.as_str());
        for entry in &deck.entries {
            let note = Note::new(&self.model, vec![entry.name.clone(), entry.meaning.clone()])
                .map_err(package_error)?;
            out_deck.add_note(note);
        }

        let path = self.package_path(&deck.name);
        Package::new(&self.model, &out_deck)
            .write_to_file(&path)
            .map_err(package_error)?;

        tracing::info!(
            deck = %deck.name,
            deck_id = out_deck.id,
            notes = deck.len(),
            path = %path.display(),
            "wrote deck"
        );
        Ok(path)
    }

    /// Write every deck in order, stopping at the first failure.
    ///
    /// Packages written before a failure are left in place.
    ///
    /// Two decks sharing a name would share a file, so that is rejected
    /// before the second one is written.
    pub fn export_all<S: IdSource + ?Sized>(&self, decks: &[Deck], ids: &mut S) -> Result<Vec<PathBuf>> {
        let mut written: HashMap<PathBuf, &str> = HashMap::new();
        let mut paths = Vec::with_capacity(decks.len());

        for deck in decks {
            let path = self.package_path(&deck.name);
            if let Some(first) = written.get(&path) {
                return Err(Error::FileNameCollision {
                    first: first.to_string(),
                    second: deck.name.clone(),
                    path,
                });
            }
            let path = self.export_deck(deck, &mut *ids)?;
            written.insert(path.clone(), deck.name.as_str());
            paths.push(path);
        }

        Ok(paths)
    }
}

/// Escape `%` and path separators as `%XX`, leaving the rest of the name intact.
fn file_stem(deck_name: &str) -> String {
    let mut stem = String::with_capacity(deck_name.len());
    for c in deck_name.chars() {
        match c {
            '%' => stem.push_str("%25"),
            '/' => stem.push_str("%2F"),
            '\\' => stem.push_str("%5C"),
            _ => stem.push(c),
        }
    }
    stem
}
