//! Notation tokens.

use std::fmt;

use serde::{Serialize, Serializer};

use super::tile::{TileCode, BACK_MARKER};

/// One semantic unit of a parsed notation string.
///
/// Tiles carry their code; every other variant is a fixed annotation
/// marker. `Rotate` only marks that the following token should be drawn
/// turned sideways, applying it is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A face-up numbered tile.
    Tile(TileCode),
    /// A face-down tile (`o`).
    Back,
    /// Visual gap between groups (` `).
    Space,
    /// Dora indicator (`d`).
    Dora,
    /// Self-draw, tsumo (`m` with no pending digits).
    SelfDraw,
    /// Win by discard, ron (`r`).
    WinByDiscard,
    /// Discard (`t`).
    Discard,
    /// Rotate the next tile by 90 degrees (`y`).
    Rotate,
}

impl Token {
    /// Whether this token is drawn from the tile sprite sheet.
    pub fn is_tile(&self) -> bool {
        matches!(self, Token::Tile(_) | Token::Back)
    }

    /// The notation character of an annotation, `None` for numbered tiles.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Token::Tile(_) => None,
            Token::Back => Some('o'),
            Token::Space => Some(' '),
            Token::Dora => Some('d'),
            Token::SelfDraw => Some('m'),
            Token::WinByDiscard => Some('r'),
            Token::Discard => Some('t'),
            Token::Rotate => Some('y'),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tile(code) => write!(f, "{}", code),
            Token::Back => write!(f, "{}", BACK_MARKER),
            other => match other.symbol() {
                Some(c) => write!(f, "{}", c),
                None => Ok(()),
            },
        }
    }
}

impl From<TileCode> for Token {
    fn from(code: TileCode) -> Self {
        Token::Tile(code)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_notation() {
        let tile = Token::Tile("3s".parse().unwrap());
        assert_eq!(tile.to_string(), "3s");
        assert_eq!(Token::Back.to_string(), "o");
        assert_eq!(Token::Space.to_string(), " ");
        assert_eq!(Token::SelfDraw.to_string(), "m");
        assert_eq!(Token::Rotate.to_string(), "y");
    }

    #[test]
    fn test_is_tile() {
        assert!(Token::Back.is_tile());
        assert!(Token::Tile("1z".parse().unwrap()).is_tile());
        assert!(!Token::Dora.is_tile());
        assert!(!Token::Space.is_tile());
    }

    #[test]
    fn test_serialize_as_strings() {
        let tokens = vec![Token::Tile("1m".parse().unwrap()), Token::Space, Token::Dora];
        assert_eq!(serde_json::to_string(&tokens).unwrap(), r#"["1m"," ","d"]"#);
    }
}
