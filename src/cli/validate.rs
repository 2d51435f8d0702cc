//! Validate command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover_files, Manifest};
use crate::error::{MjError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_files};

/// Validate notation files
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to validate (default: manifest sources)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let scan = discover_files(&args.paths, Path::new("."), manifest);

    if scan.is_empty() {
        printer.warning("Skipping", "no notation files found");
        return Ok(());
    }

    printer.status("Validating", &plural(scan.total(), "file", "files"));
    let result = validate_files(&scan)?;
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(MjError::Validation {
            message: plural(result.error_count(), "error", "errors"),
        });
    }
    Ok(())
}
