use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Main error type for mjtile operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum MjError {
    #[error("Invalid tile code: {code}")]
    #[diagnostic(
        code(mjtile::invalid_tile),
        help("tile codes are a digit 1-9 followed by m, p or s, or a digit 1-7 followed by z")
    )]
    InvalidTileCode { code: String },

    #[error("Invalid tile '{code}' in notation")]
    #[diagnostic(
        code(mjtile::invalid_tile),
        help("m, p and s take digits 1-9; z takes digits 1-7")
    )]
    InvalidTile {
        code: String,
        #[source_code]
        input: String,
        #[label("no such tile")]
        span: SourceSpan,
    },

    #[error("Suit '{suit}' has no preceding digit")]
    #[diagnostic(code(mjtile::missing_digit), help("write the tile numbers before the suit, e.g. 123p"))]
    MissingDigit {
        suit: char,
        #[source_code]
        input: String,
        #[label("no digits before this suit")]
        span: SourceSpan,
    },

    #[error("Digits '{digits}' are not followed by a suit before '{found}'")]
    #[diagnostic(code(mjtile::dangling_digits), help("close pending digits with m, p, s or z"))]
    DanglingDigits {
        found: char,
        digits: String,
        #[source_code]
        input: String,
        #[label("expected a suit here")]
        span: SourceSpan,
    },

    #[error("Digits '{digits}' at end of input have no suit")]
    #[diagnostic(code(mjtile::trailing_digits), help("end the notation with m, p, s or z"))]
    TrailingDigits {
        digits: String,
        #[source_code]
        input: String,
        #[label("missing suit")]
        span: SourceSpan,
    },

    #[error("Unrecognized character '{found}'")]
    #[diagnostic(
        code(mjtile::unrecognized),
        help("valid characters are digits, m p s z, o d r t y and space")
    )]
    UnrecognizedCharacter {
        found: char,
        #[source_code]
        input: String,
        #[label("not part of the notation")]
        span: SourceSpan,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mjtile::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Manifest error: {message}")]
    #[diagnostic(code(mjtile::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(mjtile::output))]
    Output { message: String },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(mjtile::validate))]
    Validation { message: String },
}

impl MjError {
    pub(crate) fn invalid_tile(code: impl Into<String>) -> Self {
        MjError::InvalidTileCode { code: code.into() }
    }
}

pub type Result<T> = std::result::Result<T, MjError>;
