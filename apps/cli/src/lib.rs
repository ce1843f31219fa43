pub mod cli;
pub mod config;

use anyhow::Context;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yanki_core::{card_template, Exporter};

pub use cli::Cli;
pub use config::{Config, ConfigError, Mode};

/// Install the stderr log subscriber. `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Convert the configured input. Dry-run listings go to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    let decks = yanki_core::plan(&config.input)
        .with_context(|| format!("failed to read entries from {}", config.input.display()))?;
    tracing::info!(decks = decks.len(), "planned decks");

    match config.mode {
        Mode::DryRun { json: true } => {
            serde_json::to_writer_pretty(&mut *out, &decks)?;
            writeln!(out)?;
        }
        Mode::DryRun { json: false } => {
            for deck in &decks {
                writeln!(out, "{}\t{}", deck.name, deck.len())?;
            }
        }
        Mode::Export => {
            let mut ids = config.id_source();
            let exporter = Exporter::new(card_template(&mut ids), &config.output_dir)?;
            let written = exporter.export_all(&decks, &mut ids)?;
            tracing::info!(
                packages = written.len(),
                output = %config.output_dir.display(),
                "export finished"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    const WORDS: &str = "\
dog:
  language: es
  meaning: perro
run:
  language: es
  type: verb
  meaning: correr
gato:
  language: es
  meaning: cat
";

    fn config(dir: &Path, yaml: &str, mode: Mode) -> Config {
        let input = dir.join("words.yaml");
        fs::write(&input, yaml).unwrap();
        let output_dir = dir.join("out");
        fs::create_dir_all(&output_dir).unwrap();
        Config {
            input,
            output_dir,
            seed: Some(1),
            mode,
        }
    }

    fn written_files(config: &Config) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&config.output_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn dry_run_lists_decks_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), WORDS, Mode::DryRun { json: false });
        let mut out = Vec::new();

        run(&config, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "es\t2\nverb\t1\n");
        assert!(written_files(&config).is_empty());
    }

    #[test]
    fn dry_run_json() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), WORDS, Mode::DryRun { json: true });
        let mut out = Vec::new();

        run(&config, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["name"], "es");
        assert_eq!(json[0]["entries"][1]["name"], "gato");
        assert_eq!(json[1]["entries"][0]["group"]["kind"], "category");
    }

    #[test]
    fn export_writes_one_package_per_deck() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), WORDS, Mode::Export);

        run(&config, &mut std::io::sink()).unwrap();

        assert_eq!(written_files(&config), vec!["es.apkg", "verb.apkg"]);
    }

    #[test]
    fn export_fails_on_missing_field_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), "dog:\n  language: es\n", Mode::Export);

        let err = run(&config, &mut std::io::sink()).unwrap_err();

        assert!(format!("{:#}", err).contains("missing required field \"meaning\""));
        assert!(written_files(&config).is_empty());
    }
}
