use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "yanki")]
#[command(about = "Convert a YAML vocabulary file into Anki decks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML file mapping each entry to its language, type and meaning.
    pub yaml_filename: PathBuf,

    /// Existing folder the .apkg files are written to (one per deck).
    pub output_folder: PathBuf,

    /// Seed for model and deck identifiers (random when omitted).
    #[arg(long, env = "YANKI_SEED")]
    pub seed: Option<u64>,

    /// Print the decks that would be written, without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the decks and their entries as JSON.
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}
