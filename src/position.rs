//! Sprite-sheet position mapping.
//!
//! The tile sheet is a fixed grid: one row per suit, one column per digit,
//! each cell `TILE_WIDTH` x `TILE_HEIGHT` pixels. Offsets are negative so they
//! can be used directly as a CSS `background-position`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{TileCode, BACK_MARKER, TILE_HEIGHT, TILE_WIDTH};

/// Pixel offset of a tile in the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub is_back: bool,
}

/// The card-back art reuses the 5z slot.
pub const BACK_POSITION: Position = Position {
    x: -4 * TILE_WIDTH,
    y: -3 * TILE_HEIGHT,
    is_back: true,
};

impl Position {
    /// Format as a CSS `background-position` value, e.g. `-60px -44px`.
    pub fn to_css(&self) -> String {
        format!("{}px {}px", self.x, self.y)
    }
}

impl TileCode {
    /// Sprite position of an already validated code.
    pub fn position(self) -> Position {
        Position {
            x: -(i32::from(self.digit()) - 1) * TILE_WIDTH,
            y: self.suit().row_offset(),
            is_back: false,
        }
    }
}

/// Map a tile code (`"3s"`, or `"o"` for a face-down tile) to its position.
pub fn map_tile(code: &str) -> Result<Position> {
    if is_back_tile(code) {
        return Ok(BACK_POSITION);
    }
    let tile: TileCode = code.parse()?;
    Ok(tile.position())
}

/// Map every code, failing on the first invalid one.
pub fn map_tiles<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Position>> {
    codes.iter().map(|code| map_tile(code.as_ref())).collect()
}

/// CSS `background-position` string for a tile code.
pub fn background_position(code: &str) -> Result<String> {
    map_tile(code).map(|pos| pos.to_css())
}

/// Whether `code` is exactly the face-down marker. Performs no validation.
pub fn is_back_tile(code: &str) -> bool {
    code == BACK_MARKER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MjError;

    #[test]
    fn test_numbered_suits() {
        for (suit, row) in [('m', 0), ('p', -44), ('s', -88)] {
            for d in 1..=9 {
                let pos = map_tile(&format!("{}{}", d, suit)).unwrap();
                assert_eq!(pos.y, row);
                assert_eq!(pos.x, -(d - 1) * 30);
                assert!(!pos.is_back);
            }
        }
    }

    #[test]
    fn test_honor_range() {
        for d in 1..=7 {
            let pos = map_tile(&format!("{}z", d)).unwrap();
            assert_eq!(pos.y, -132);
            assert_eq!(pos.x, -(d - 1) * 30);
        }
        for code in ["8z", "9z"] {
            assert_eq!(
                map_tile(code),
                Err(MjError::InvalidTileCode {
                    code: code.to_string()
                })
            );
        }
    }

    #[test]
    fn test_back_tile() {
        assert_eq!(
            map_tile("o").unwrap(),
            Position {
                x: -120,
                y: -132,
                is_back: true
            }
        );
        assert!(is_back_tile("o"));
        assert!(!is_back_tile("1m"));
        assert!(!is_back_tile("O"));
        assert!(!is_back_tile("garbage"));
    }

    #[test]
    fn test_back_shares_5z_slot() {
        let five_z = map_tile("5z").unwrap();
        let back = map_tile("o").unwrap();
        assert_eq!((five_z.x, five_z.y), (back.x, back.y));
        assert_ne!(five_z.is_back, back.is_back);
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["", "0p", "10s", "1q", "z", "1m ", "oo"] {
            assert!(map_tile(code).is_err(), "accepted {:?}", code);
        }
    }

    #[test]
    fn test_mapping_is_repeatable() {
        for code in TileCode::all() {
            let s = code.to_string();
            assert_eq!(map_tile(&s).unwrap(), map_tile(&s).unwrap());
            assert_eq!(map_tile(&s).unwrap(), code.position());
        }
    }

    #[test]
    fn test_map_tiles_batch() {
        let positions = map_tiles(&["1m", "o", "9s"]).unwrap();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[1], BACK_POSITION);
        assert_eq!((positions[2].x, positions[2].y), (-240, -88));
    }

    #[test]
    fn test_map_tiles_fails_on_first_bad() {
        let err = map_tiles(&["1m", "8z", "0p"]).unwrap_err();
        assert_eq!(
            err,
            MjError::InvalidTileCode {
                code: "8z".to_string()
            }
        );
    }

    #[test]
    fn test_background_position() {
        insta::assert_snapshot!(background_position("3p").unwrap(), @"-60px -44px");
        insta::assert_snapshot!(background_position("1m").unwrap(), @"0px 0px");
        insta::assert_snapshot!(background_position("o").unwrap(), @"-120px -132px");
        assert!(background_position("8z").is_err());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&map_tile("o").unwrap()).unwrap();
        assert_eq!(json, r#"{"x":-120,"y":-132,"isBack":true}"#);
    }
}
