//! Tile codes and suits.
//!
//! A tile code is a digit followed by a suit letter (`5p`, `7z`). Codes are
//! small `Copy` values; their string form is the only identity they carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MjError, Result};

/// The code of a face-down tile.
pub const BACK_MARKER: &str = "o";

/// Width in pixels of one tile column in the sprite sheet.
pub const TILE_WIDTH: i32 = 30;

/// Height in pixels of one suit row in the sprite sheet.
pub const TILE_HEIGHT: i32 = 44;

/// One of the four tile categories, each occupying a sprite-sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Characters (`m`)
    Man,
    /// Circles (`p`)
    Pin,
    /// Bamboo (`s`)
    Sou,
    /// Winds and dragons (`z`)
    Honor,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Man, Suit::Pin, Suit::Sou, Suit::Honor];

    /// Parse a lowercase suit letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'm' => Some(Suit::Man),
            'p' => Some(Suit::Pin),
            's' => Some(Suit::Sou),
            'z' => Some(Suit::Honor),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Suit::Man => 'm',
            Suit::Pin => 'p',
            Suit::Sou => 's',
            Suit::Honor => 'z',
        }
    }

    /// Highest digit a tile of this suit can carry.
    pub fn max_digit(self) -> u8 {
        match self {
            Suit::Honor => 7,
            _ => 9,
        }
    }

    /// Vertical sprite-sheet offset of this suit's row.
    pub fn row_offset(self) -> i32 {
        match self {
            Suit::Man => 0,
            Suit::Pin => -TILE_HEIGHT,
            Suit::Sou => -2 * TILE_HEIGHT,
            Suit::Honor => -3 * TILE_HEIGHT,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A validated numbered tile, e.g. `3s` or `5z`.
///
/// Construction always goes through [`TileCode::new`] or [`FromStr`], so a
/// `TileCode` in hand is known to have a sprite slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCode {
    suit: Suit,
    digit: u8,
}

impl TileCode {
    /// Create a tile code, checking the digit against the suit's range.
    pub fn new(digit: u8, suit: Suit) -> Result<Self> {
        if digit < 1 || digit > suit.max_digit() {
            return Err(MjError::invalid_tile(format!("{}{}", digit, suit)));
        }
        Ok(Self { suit, digit })
    }

    pub fn digit(self) -> u8 {
        self.digit
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Every valid tile code, in suit then digit order.
    pub fn all() -> impl Iterator<Item = TileCode> {
        Suit::ALL.into_iter().flat_map(|suit| {
            (1..=suit.max_digit()).map(move |digit| TileCode { suit, digit })
        })
    }
}

impl fmt::Display for TileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.digit, self.suit)
    }
}

impl FromStr for TileCode {
    type Err = MjError;

    /// Accepts `^\d+[mpsz]$` with the number in the suit's range.
    fn from_str(code: &str) -> Result<Self> {
        let invalid = || MjError::invalid_tile(code);

        let suit_char = code.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let number = &code[..code.len() - suit_char.len_utf8()];

        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // Long digit runs overflow u8; they are out of range either way.
        let digit: u8 = number.parse().map_err(|_| invalid())?;
        if digit < 1 || digit > suit.max_digit() {
            return Err(invalid());
        }

        Ok(Self { suit, digit })
    }
}

impl Serialize for TileCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
