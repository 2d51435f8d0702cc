//! Project manifest (mjtile.yaml) parsing.
//!
//! The manifest names where notation files live and the default output
//! format for the CLI.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{MjError, Result};

/// Output format for tokens and positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line
    #[default]
    Text,
    /// JSON
    Json,
    /// CSS background-position values
    Css,
}

/// Project manifest loaded from mjtile.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories or files to scan for notation files.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// File extension of notation files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Default output format.
    pub format: OutputFormat,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

fn default_extension() -> String {
    "tiles".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            extension: default_extension(),
            format: OutputFormat::default(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from an mjtile.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MjError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| MjError::Manifest {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check mjtile.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Whether `path` has the notation file extension.
    pub fn is_notation_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

/// Simple glob matching: `*.ext`, `**/dir/*`, `dir/*`, otherwise substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.ends_with(suffix) || path.contains(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix)) || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("format: json").unwrap();

        assert_eq!(manifest.format, OutputFormat::Json);
        assert!(manifest.sources.is_empty());
        assert_eq!(manifest.extension, "tiles");
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - hands/
  - puzzles/
extension: mj
format: css
excludes:
  - "*.bak"
  - "**/drafts/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["hands/", "puzzles/"]);
        assert_eq!(manifest.extension, "mj");
        assert_eq!(manifest.format, OutputFormat::Css);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/drafts/*"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.extension, "tiles");
        assert_eq!(manifest.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = Manifest::parse("format: [oops").unwrap_err();
        assert!(matches!(err, MjError::Manifest { .. }));

        let err = Manifest::parse("format: svg").unwrap_err();
        assert!(matches!(err, MjError::Manifest { .. }));
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["hands/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["hands/"]);
    }

    #[test]
    fn test_is_notation_file() {
        let manifest = Manifest::default();
        assert!(manifest.is_notation_file(Path::new("hands/east.tiles")));
        assert!(manifest.is_notation_file(Path::new("EAST.TILES")));
        assert!(!manifest.is_notation_file(Path::new("east.txt")));
        assert!(!manifest.is_notation_file(Path::new("tiles")));
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("file.bak")));
        assert!(manifest.is_excluded(Path::new("path/to/file.bak")));
        assert!(!manifest.is_excluded(Path::new("file.tiles")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("drafts/foo.tiles")));
        assert!(manifest.is_excluded(Path::new("hands/drafts/bar.tiles")));
        assert!(!manifest.is_excluded(Path::new("hands/east.tiles")));
    }

    #[test]
    fn test_is_excluded_substring() {
        let manifest = Manifest {
            excludes: vec!["temp".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("temp")));
        assert!(manifest.is_excluded(Path::new("path/temp/file")));
    }
}
