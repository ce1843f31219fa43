//! Decks: a named, identified collection of notes.

use serde_json::{json, Value};

use crate::note::Note;

/// Deck id Anki reserves for its built-in "Default" deck.
pub const DEFAULT_DECK_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    notes: Vec<Note>,
}

impl Deck {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            notes: Vec::new(),
        }
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// JSON stored under this deck's id in `col.decks`.
    pub(crate) fn to_json(&self, modified: i64) -> Value {
        deck_json(self.id, &self.name, modified, -1)
    }
}

/// The "Default" deck every collection must contain.
pub(crate) fn default_deck_json(modified: i64) -> Value {
    deck_json(DEFAULT_DECK_ID, "Default", modified, 0)
}

fn deck_json(id: i64, name: &str, modified: i64, usn: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "desc": "",
        "mod": modified,
        "usn": usn,
        "conf": 1,
        "dyn": 0,
        "collapsed": false,
        "extendNew": 10,
        "extendRev": 50,
        "newToday": [0, 0],
        "revToday": [0, 0],
        "lrnToday": [0, 0],
        "timeToday": [0, 0],
    })
}
