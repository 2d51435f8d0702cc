//! mjtile - Mahjong tile notation parser and sprite position mapper
//!
//! Turns compact tile notation (`123m456p 11z`) into tokens and maps tile
//! codes to pixel offsets in a tile sprite sheet.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod position;
pub mod types;
pub mod validation;

pub use discovery::{discover_files, load_manifest, Manifest, OutputFormat};
pub use error::{MjError, Result};
pub use parser::{parse_notation, parse_notation_spanned, Notation, Span, Spanned};
pub use position::{background_position, is_back_tile, map_tile, map_tiles, Position, BACK_POSITION};
pub use types::{Suit, TileCode, Token, BACK_MARKER, TILE_HEIGHT, TILE_WIDTH};
pub use validation::{validate_file, validate_source, Diagnostic, Severity, ValidationResult};
