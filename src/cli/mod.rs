pub mod completions;
pub mod parse;
pub mod position;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::discovery::{load_manifest, Manifest, MANIFEST_FILENAME};
use crate::error::Result;
use crate::output::Printer;

/// mjtile - Mahjong tile notation parser and sprite position mapper
#[derive(Parser, Debug)]
#[command(name = "mjtile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Path to an mjtile.yaml manifest (default: ./mjtile.yaml if present)
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse notation strings into tokens
    Parse(parse::ParseArgs),

    /// Look up sprite-sheet positions of tile codes
    Position(position::PositionArgs),

    /// Validate notation files
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Load the manifest named by `--manifest`, or the one in the current
    /// directory, or defaults.
    pub fn load_manifest(&self, printer: &Printer) -> Result<Manifest> {
        if let Some(path) = &self.manifest {
            printer.status("Loading", &path.display().to_string());
            return Manifest::load(path);
        }

        let (manifest, found) = load_manifest(Path::new("."))?;
        if found {
            printer.status("Loading", MANIFEST_FILENAME);
        }
        Ok(manifest)
    }
}
