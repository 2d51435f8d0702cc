//! Validation of notation files.
//!
//! A notation file holds one notation per line. Blank lines and lines whose
//! first non-space character is `#` are skipped. Each remaining line is
//! parsed on its own, so one bad line does not hide problems in the next.

mod warning;

pub use warning::{Diagnostic, Severity, SourceLocation, ValidationResult};

use std::path::Path;

use crate::discovery::ScanResult;
use crate::error::{MjError, Result};
use crate::output::Printer;
use crate::parser::{parse_notation, Span};
use crate::types::Token;

/// Notation lines of a file, with their 1-indexed line numbers.
pub fn notation_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
}

/// Validate every notation line of `source`.
pub fn validate_source(path: &Path, source: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (line_no, line) in notation_lines(source) {
        let location = |column| SourceLocation {
            path: path.to_path_buf(),
            line: line_no,
            column,
        };

        match parse_notation(line) {
            Ok(tokens) => {
                if !tokens.iter().any(Token::is_tile) {
                    result.push(
                        Diagnostic::warning(
                            "mjtile::validate::no_tiles",
                            format!("'{}' contains no tiles", line),
                        )
                        .at(location(None)),
                    );
                }
            }
            Err(err) => {
                let column = error_column(&err, line);
                result.push(Diagnostic::from_error(&err).at(location(column)));
            }
        }
    }

    result
}

/// Read and validate a notation file.
pub fn validate_file(path: &Path) -> Result<ValidationResult> {
    let source = std::fs::read_to_string(path).map_err(|e| MjError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(validate_source(path, &source))
}

/// Validate every file of a scan.
pub fn validate_files(scan: &ScanResult) -> Result<ValidationResult> {
    let mut result = ValidationResult::new();
    for file in &scan.files {
        result.merge(validate_file(file)?);
    }
    Ok(result)
}

/// Character column an error points at, if it carries a span.
fn error_column(err: &MjError, line: &str) -> Option<usize> {
    let span = match err {
        MjError::InvalidTile { span, .. }
        | MjError::MissingDigit { span, .. }
        | MjError::DanglingDigits { span, .. }
        | MjError::TrailingDigits { span, .. }
        | MjError::UnrecognizedCharacter { span, .. } => Span::from(*span),
        _ => return None,
    };
    Some(span.column(line))
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        match &d.location {
            Some(loc) => eprintln!("{}[{}]: {} {}", label, d.code, printer.cyan(&loc.to_string()), d.message),
            None => eprintln!("{}[{}]: {}", label, d.code, d.message),
        }
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!("{} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("{} warning(s)", warnings));
    } else {
        printer.success("Passed", "no problems found");
    }
}
