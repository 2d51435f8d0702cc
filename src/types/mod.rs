//! Core value types: tile codes, suits and notation tokens.

mod tile;
mod token;

pub use tile::{Suit, TileCode, BACK_MARKER, TILE_HEIGHT, TILE_WIDTH};
pub use token::Token;
