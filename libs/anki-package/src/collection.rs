//! Writer for the SQLite collection embedded in a package.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde_json::{json, Map, Value};
use std::path::Path;

use crate::deck::{default_deck_json, Deck, DEFAULT_DECK_ID};
use crate::error::Result;
use crate::model::Model;
use crate::schema::{
    CARD_NEW, COLLECTION_CREATED, FIELD_SEPARATOR, INSERT_COLLECTION, SCHEMA, SCHEMA_VERSION,
};

/// A freshly created Anki collection.
pub struct Collection {
    conn: Connection,
}

impl Collection {
    /// Create a collection database at path.
    pub fn create<P: AsRef<Path>>(path: P, now: DateTime<Utc>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let collection = Self { conn };
        collection.initialize(now)?;
        Ok(collection)
    }

    /// Create an in-memory collection (for testing).
    pub fn create_in_memory(now: DateTime<Utc>) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let collection = Self { conn };
        collection.initialize(now)?;
        Ok(collection)
    }

    fn initialize(&self, now: DateTime<Utc>) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;

        let mut decks = Map::new();
        decks.insert(
            DEFAULT_DECK_ID.to_string(),
            default_deck_json(now.timestamp()),
        );

        self.conn.execute(
            INSERT_COLLECTION,
            params![
                COLLECTION_CREATED,
                now.timestamp_millis(),
                now.timestamp_millis(),
                SCHEMA_VERSION,
                collection_conf().to_string(),
                Value::Object(decks).to_string(),
                deck_conf().to_string(),
            ],
        )?;
        Ok(())
    }

    /// Write a model, a deck and all of the deck's notes and cards.
    pub fn write_deck(&self, model: &Model, deck: &Deck, now: DateTime<Utc>) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let modified = now.timestamp();

        let mut models = self.json_column("models")?;
        models.insert(model.id.to_string(), model.to_json(deck.id, modified));
        let mut decks = self.json_column("decks")?;
        decks.insert(deck.id.to_string(), deck.to_json(modified));

        tx.execute(
            "UPDATE col SET models = ?1, decks = ?2, mod = ?3 WHERE id = 1",
            params![
                Value::Object(models).to_string(),
                Value::Object(decks).to_string(),
                now.timestamp_millis(),
            ],
        )?;

        let mut ids = IdSequence::starting_at(now.timestamp_millis());
        for (position, note) in deck.notes().iter().enumerate() {
            let note_id = ids.next_id();
            tx.execute(
                "INSERT INTO notes (id, guid, mid, mod, usn, tags, flds, sfld, csum, flags, data)
                 VALUES (?1, ?2, ?3, ?4, -1, '', ?5, ?6, ?7, 0, '')",
                params![
                    note_id,
                    note.guid(),
                    note.model_id(),
                    modified,
                    note.fields().join(FIELD_SEPARATOR),
                    note.sort_field(),
                    note.checksum(),
                ],
            )?;

            for &ord in note.card_ordinals() {
                tx.execute(
                    "INSERT INTO cards (id, nid, did, ord, mod, usn, type, queue, due, ivl, factor,
                                        reps, lapses, left, odue, odid, flags, data)
                     VALUES (?1, ?2, ?3, ?4, ?5, -1, ?6, ?6, ?7, 0, 0, 0, 0, 0, 0, 0, 0, '')",
                    params![
                        ids.next_id(),
                        note_id,
                        deck.id,
                        ord as i64,
                        modified,
                        CARD_NEW,
                        position as i64 + 1,
                    ],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn json_column(&self, column: &str) -> Result<Map<String, Value>> {
        let text: String = self.conn.query_row(
            &format!("SELECT {} FROM col WHERE id = 1", column),
            [],
            |row| row.get(0),
        )?;
        match serde_json::from_str(&text)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Underlying connection, for inspection in tests.
    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Monotonic millisecond ids, unique within one collection.
struct IdSequence {
    next: i64,
}

impl IdSequence {
    fn starting_at(next: i64) -> Self {
        Self { next }
    }

    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

fn collection_conf() -> Value {
    json!({
        "activeDecks": [DEFAULT_DECK_ID],
        "curDeck": DEFAULT_DECK_ID,
        "newSpread": 0,
        "collapseTime": 1200,
        "timeLim": 0,
        "estTimes": true,
        "dueCounts": true,
        "curModel": null,
        "nextPos": 1,
        "sortType": "noteFld",
        "sortBackwards": false,
        "addToCur": true,
    })
}

fn deck_conf() -> Value {
    json!({
        "1": {
            "id": 1,
            "name": "Default",
            "mod": 0,
            "usn": 0,
            "maxTaken": 60,
            "timer": 0,
            "autoplay": true,
            "replayq": true,
            "new": {
                "perDay": 20,
                "delays": [1, 10],
                "ints": [1, 4, 7],
                "initialFactor": 2500,
                "separate": true,
                "order": 1,
                "bury": true,
            },
            "rev": {
                "perDay": 100,
                "fuzz": 0.05,
                "ivlFct": 1,
                "maxIvl": 36500,
                "ease4": 1.3,
                "bury": true,
                "minSpace": 1,
            },
            "lapse": {
                "delays": [10],
                "mult": 0,
                "minInt": 1,
                "leechFails": 8,
                "leechAction": 0,
            },
        }
    })
}
