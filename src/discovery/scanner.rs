//! File system scanner for notation files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Notation files found by a scan.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one, keeping files sorted and unique.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
        self.files.sort();
        self.files.dedup();
    }
}

/// Scan a file or directory for notation files.
///
/// Directories are walked recursively. A path naming a single file is
/// taken as-is, whatever its extension.
pub fn scan_path(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if root.is_file() {
        result.files.push(root.to_path_buf());
        return result;
    }

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() || manifest.is_excluded(path) {
            continue;
        }

        if manifest.is_notation_file(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result.files.sort();
    result
}

/// Scan multiple source paths, relative ones resolved against `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_path(&source_path, manifest));
    }

    result
}
