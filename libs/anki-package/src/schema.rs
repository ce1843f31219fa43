//! SQLite schema for the `collection.anki2` file inside a package.

/// Collection schema version understood by every Anki release that imports `.apkg`.
pub const SCHEMA_VERSION: i64 = 11;

/// Creation time recorded in the `col` row (seconds since epoch).
pub const COLLECTION_CREATED: i64 = 1411124400;

/// Complete schema of a legacy Anki collection.
pub const SCHEMA: &str = r#"
CREATE TABLE col (
    id      INTEGER PRIMARY KEY,
    crt     INTEGER NOT NULL,
    mod     INTEGER NOT NULL,
    scm     INTEGER NOT NULL,
    ver     INTEGER NOT NULL,
    dty     INTEGER NOT NULL,
    usn     INTEGER NOT NULL,
    ls      INTEGER NOT NULL,
    conf    TEXT NOT NULL,
    models  TEXT NOT NULL,
    decks   TEXT NOT NULL,
    dconf   TEXT NOT NULL,
    tags    TEXT NOT NULL
);

CREATE TABLE notes (
    id      INTEGER PRIMARY KEY,
    guid    TEXT NOT NULL,
    mid     INTEGER NOT NULL,
    mod     INTEGER NOT NULL,
    usn     INTEGER NOT NULL,
    tags    TEXT NOT NULL,
    flds    TEXT NOT NULL,
    sfld    INTEGER NOT NULL,
    csum    INTEGER NOT NULL,
    flags   INTEGER NOT NULL,
    data    TEXT NOT NULL
);

CREATE TABLE cards (
    id      INTEGER PRIMARY KEY,
    nid     INTEGER NOT NULL,
    did     INTEGER NOT NULL,
    ord     INTEGER NOT NULL,
    mod     INTEGER NOT NULL,
    usn     INTEGER NOT NULL,
    type    INTEGER NOT NULL,
    queue   INTEGER NOT NULL,
    due     INTEGER NOT NULL,
    ivl     INTEGER NOT NULL,
    factor  INTEGER NOT NULL,
    reps    INTEGER NOT NULL,
    lapses  INTEGER NOT NULL,
    left    INTEGER NOT NULL,
    odue    INTEGER NOT NULL,
    odid    INTEGER NOT NULL,
    flags   INTEGER NOT NULL,
    data    TEXT NOT NULL
);

CREATE TABLE revlog (
    id      INTEGER PRIMARY KEY,
    cid     INTEGER NOT NULL,
    usn     INTEGER NOT NULL,
    ease    INTEGER NOT NULL,
    ivl     INTEGER NOT NULL,
    lastIvl INTEGER NOT NULL,
    factor  INTEGER NOT NULL,
    time    INTEGER NOT NULL,
    type    INTEGER NOT NULL
);

CREATE TABLE graves (
    usn     INTEGER NOT NULL,
    oid     INTEGER NOT NULL,
    type    INTEGER NOT NULL
);

-- Indexes
CREATE INDEX ix_notes_usn ON notes (usn);
CREATE INDEX ix_cards_usn ON cards (usn);
CREATE INDEX ix_revlog_usn ON revlog (usn);
CREATE INDEX ix_cards_nid ON cards (nid);
CREATE INDEX ix_cards_sched ON cards (did, queue, due);
CREATE INDEX ix_revlog_cid ON revlog (cid);
CREATE INDEX ix_notes_csum ON notes (csum);
"#;

/// Insert the single collection row. Models and decks are filled in afterwards.
pub const INSERT_COLLECTION: &str = r#"
INSERT INTO col (id, crt, mod, scm, ver, dty, usn, ls, conf, models, decks, dconf, tags)
VALUES (1, ?1, ?2, ?3, ?4, 0, 0, 0, ?5, '{}', ?6, ?7, '{}')
"#;

/// Card type/queue value for a card that has never been studied.
pub const CARD_NEW: i64 = 0;

/// Separator between field values in `notes.flds`.
pub const FIELD_SEPARATOR: &str = "\x1f";
