//! Run configuration resolved from the command line and environment.

use std::path::PathBuf;
use thiserror::Error;
use yanki_core::{IdSource, RandomIds};

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The filename should point to an existent YAML file: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("The output folder should exist: {}", .0.display())]
    OutputNotFound(PathBuf),
}

/// What a run does with the grouped decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Export,
    DryRun { json: bool },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub mode: Mode,
}

impl Config {
    /// Validate paths: the input must be a file and the output folder must exist.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if !cli.yaml_filename.is_file() {
            return Err(ConfigError::InputNotFound(cli.yaml_filename));
        }
        if !cli.output_folder.is_dir() {
            return Err(ConfigError::OutputNotFound(cli.output_folder));
        }

        let mode = if cli.dry_run {
            Mode::DryRun { json: cli.json }
        } else {
            Mode::Export
        };

        Ok(Self {
            input: cli.yaml_filename,
            output_dir: cli.output_folder,
            seed: cli.seed,
            mode,
        })
    }

    /// Identifier source for this run: seeded when a seed was configured.
    pub fn id_source(&self) -> impl IdSource {
        match self.seed {
            Some(seed) => RandomIds::seeded(seed),
            None => RandomIds::from_entropy(),
        }
    }
}
