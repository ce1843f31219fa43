//! Core types for the YAML to deck conversion.

use serde::Serialize;

/// Key an entry is grouped by.
///
/// A non-empty `type` wins; otherwise the entry falls back to its `language`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum GroupKey {
    Category(String),
    Language(String),
}

impl GroupKey {
    /// Name of the deck this key selects.
    pub fn name(&self) -> &str {
        match self {
            Self::Category(name) | Self::Language(name) => name,
        }
    }
}

/// One flashcard's source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub group: GroupKey,
    pub meaning: String,
}

impl Entry {
    pub fn deck_name(&self) -> &str {
        self.group.name()
    }
}

/// Entries sharing a group key, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
