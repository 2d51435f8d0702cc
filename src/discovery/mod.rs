//! Locating notation files.
//!
//! Files come either from explicit paths on the command line or from the
//! `sources` listed in an `mjtile.yaml` manifest. Both honour the manifest's
//! extension and exclude rules.

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{Manifest, OutputFormat};
pub use scanner::{scan_path, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "mjtile.yaml";

/// Load `root/mjtile.yaml` if it exists, defaults otherwise.
///
/// The flag reports whether a manifest file was found.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Ok((Manifest::load(&manifest_path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

/// Notation files under explicit paths, or under the manifest's sources
/// (relative to `root`) when no path is given.
pub fn discover_files(paths: &[PathBuf], root: &Path, manifest: &Manifest) -> ScanResult {
    if paths.is_empty() {
        return scan_sources(&manifest.effective_sources(), root, manifest);
    }

    let mut scan = ScanResult::new();
    for path in paths {
        scan.merge(scan_path(path, manifest));
    }
    scan
}
