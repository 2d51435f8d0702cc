//! Diagnostic types for validation results.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as _;

use crate::error::MjError;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Where in a notation file a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub path: PathBuf,
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed character column, when the problem is a single character.
    pub column: Option<usize>,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(col) => write!(f, "{}:{}:{}", self.path.display(), self.line, col),
            None => write!(f, "{}:{}", self.path.display(), self.line),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable diagnostic code (e.g. "mjtile::trailing_digits").
    pub code: String,
    pub message: String,
    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            help: None,
            location: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Turn a parse failure into an error diagnostic, keeping its code and help.
    pub fn from_error(err: &MjError) -> Self {
        let code = err
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "mjtile::error".to_string());
        Self {
            help: err.help().map(|h| h.to_string()),
            ..Self::new(Severity::Error, code, err.to_string())
        }
    }

    /// Attach a file location.
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// Diagnostics gathered over one or more notation files, in file order.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// True when no line produced any diagnostic, warnings included.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationResult::new();
        a.push(Diagnostic::from_error(&MjError::invalid_tile("0p")));

        let mut b = ValidationResult::new();
        b.push(Diagnostic::warning("mjtile::b", "warning b"));

        a.merge(b);
        assert_eq!(a.error_count(), 1);
        assert_eq!(a.warning_count(), 1);
        assert!(!a.is_ok());
    }

    #[test]
    fn test_from_error_keeps_code_and_help() {
        let err = MjError::InvalidTileCode {
            code: "8z".to_string(),
        };
        let d = Diagnostic::from_error(&err);
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.code, "mjtile::invalid_tile");
        assert_eq!(d.message, "Invalid tile code: 8z");
        assert!(d.help.is_some());
    }

    #[test]
    fn test_location_display() {
        let loc = SourceLocation {
            path: PathBuf::from("hands/east.tiles"),
            line: 3,
            column: Some(7),
        };
        assert_eq!(loc.to_string(), "hands/east.tiles:3:7");

        let loc = SourceLocation { column: None, ..loc };
        assert_eq!(loc.to_string(), "hands/east.tiles:3");
    }
}
