//! Parsers for mahjong tile notation.
//!
//! A notation string lists tiles compactly: digits followed by their suit
//! (`123m456p`), with single-character annotations mixed in.
//!
//! | char        | meaning                                      |
//! |-------------|----------------------------------------------|
//! | `0-9`       | tile number, waits for a suit                |
//! | `m p s z`   | suit, closes pending digits                  |
//! | `m`         | self-draw, when no digits are pending        |
//! | `o`         | face-down tile                               |
//! | `d`         | dora indicator                               |
//! | `r`         | win by discard                               |
//! | `t`         | discard                                      |
//! | `y`         | rotate the next tile                         |
//! | space       | gap                                          |
//!
//! Letters are case-insensitive.
//!
//! # Usage
//!
//! ```
//! use mjtile::parser::parse_notation;
//!
//! let tokens = parse_notation("123m 5z").unwrap();
//! assert_eq!(tokens.len(), 5);
//! ```

mod notation;
pub mod span;

pub use notation::{parse_notation, parse_notation_spanned, Notation};
pub use span::{Span, Spanned};
