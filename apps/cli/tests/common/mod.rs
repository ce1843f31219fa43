//! Common test utilities for CLI integration tests.
//!
//! This module provides:
//! - TestContext: a scratch directory with an input file and output folder
//! - Helpers to run the built binary and inspect written packages

pub mod fixtures;

use rusqlite::Connection;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use zip::ZipArchive;

/// Scratch directory holding `words.yaml` and an `out/` folder.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join("out")).expect("create output folder");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn input(&self) -> PathBuf {
        self.root().join("words.yaml")
    }

    pub fn output(&self) -> PathBuf {
        self.root().join("out")
    }

    pub fn write_input(&self, yaml: &str) -> PathBuf {
        let path = self.input();
        fs::write(&path, yaml).expect("write input");
        path
    }

    /// Run the binary with the given arguments from inside the scratch directory.
    pub fn run<I, S>(&self, args: I) -> Output
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        Command::new(env!("CARGO_BIN_EXE_yanki"))
            .args(args)
            .current_dir(self.root())
            .env_remove("YANKI_SEED")
            .env_remove("RUST_LOG")
            .output()
            .expect("run yanki")
    }

    /// Run `yanki words.yaml out` plus extra flags.
    pub fn convert(&self, extra: &[&str]) -> Output {
        let mut args = vec!["words.yaml", "out"];
        args.extend_from_slice(extra);
        self.run(args)
    }

    /// Names of the files in the output folder, sorted.
    pub fn written_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.output())
            .expect("read output folder")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn package(&self, file_name: &str) -> PackageContents {
        PackageContents::read(&self.output().join(file_name), self.root())
    }
}

/// What a written `.apkg` holds, read back through its collection database.
#[derive(Debug)]
pub struct PackageContents {
    pub entries: Vec<String>,
    pub media: String,
    pub model_ids: Vec<String>,
    pub deck_names: Vec<String>,
    pub deck_ids: Vec<i64>,
    /// Note fields in insertion order.
    pub notes: Vec<Vec<String>>,
    pub card_count: i64,
}

impl PackageContents {
    fn read(path: &Path, scratch: &Path) -> Self {
        let mut archive = ZipArchive::new(File::open(path).expect("open package")).expect("zip");
        let mut entries: Vec<String> = archive.file_names().map(str::to_string).collect();
        entries.sort();

        let media = io::read_to_string(archive.by_name("media").expect("media entry"))
            .expect("read media");

        let db_path = scratch.join(format!(
            "{}.anki2",
            path.file_stem().unwrap().to_string_lossy()
        ));
        let mut db_file = File::create(&db_path).expect("create db copy");
        io::copy(
            &mut archive.by_name("collection.anki2").expect("collection entry"),
            &mut db_file,
        )
        .expect("extract collection");
        drop(db_file);

        let conn = Connection::open(&db_path).expect("open collection");

        let (models, decks): (String, String) = conn
            .query_row("SELECT models, decks FROM col", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .expect("col row");
        let models: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&models).expect("models json");
        let decks: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&decks).expect("decks json");

        let mut deck_names = Vec::new();
        let mut deck_ids = Vec::new();
        for deck in decks.values().filter(|d| d["id"] != 1) {
            deck_names.push(deck["name"].as_str().unwrap_or_default().to_string());
            deck_ids.push(deck["id"].as_i64().unwrap_or_default());
        }

        let notes: Vec<Vec<String>> = conn
            .prepare("SELECT flds FROM notes ORDER BY id")
            .expect("prepare notes")
            .query_map([], |row| row.get::<_, String>(0))
            .expect("query notes")
            .map(|flds| {
                flds.expect("flds")
                    .split('\x1f')
                    .map(str::to_string)
                    .collect()
            })
            .collect();

        let card_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))
            .expect("count cards");

        Self {
            entries,
            media,
            model_ids: models.keys().cloned().collect(),
            deck_names,
            deck_ids,
            notes,
            card_count,
        }
    }
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
