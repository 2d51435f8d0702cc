//! Tile notation scanner.
//!
//! Scans a notation string such as `123m456p 11z` one character at a time.
//! Digits collect in a pending buffer until a suit letter closes them into
//! tiles; every other recognised character is an annotation token.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{MjError, Result};
use crate::position::{Position, BACK_POSITION};
use crate::types::{Suit, TileCode, Token};

use super::span::{Span, Spanned};

/// Parse a notation string into tokens.
///
/// Fails on the first error; no partial result is returned.
pub fn parse_notation(input: &str) -> Result<Vec<Token>> {
    Ok(parse_notation_spanned(input)?
        .into_iter()
        .map(|t| t.value)
        .collect())
}

/// Parse a notation string, keeping the byte span of each token.
///
/// Tiles point at the digit they were built from; annotations at their
/// character.
pub fn parse_notation_spanned(input: &str) -> Result<Vec<Spanned<Token>>> {
    let mut scanner = Scanner::new(input);
    for (offset, c) in input.char_indices() {
        scanner.step(offset, c)?;
    }
    scanner.finish()
}

/// Single-pass scanner state.
struct Scanner<'a> {
    input: &'a str,
    /// Digits waiting for a suit, with their byte offsets.
    pending: Vec<(u8, usize)>,
    tokens: Vec<Spanned<Token>>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pending: Vec::new(),
            tokens: Vec::with_capacity(input.len()),
        }
    }

    fn step(&mut self, offset: usize, c: char) -> Result<()> {
        let span = Span::of_char(offset, c);

        match c.to_ascii_lowercase() {
            d @ '0'..='9' => {
                self.pending.push((d as u8 - b'0', offset));
                Ok(())
            }
            // `m` is a suit only when it closes pending digits.
            'm' if self.pending.is_empty() => self.annotate(Token::SelfDraw, c, span),
            'm' => self.flush(Suit::Man, c, span),
            'p' => self.flush(Suit::Pin, c, span),
            's' => self.flush(Suit::Sou, c, span),
            'z' => self.flush(Suit::Honor, c, span),
            'o' => self.annotate(Token::Back, c, span),
            'd' => self.annotate(Token::Dora, c, span),
            'r' => self.annotate(Token::WinByDiscard, c, span),
            't' => self.annotate(Token::Discard, c, span),
            'y' => self.annotate(Token::Rotate, c, span),
            ' ' => self.annotate(Token::Space, c, span),
            _ => Err(self.unrecognized(c, span)),
        }
    }

    /// Close every pending digit into a tile of `suit`, in typed order.
    fn flush(&mut self, suit: Suit, c: char, span: Span) -> Result<()> {
        if self.pending.is_empty() {
            return Err(MjError::MissingDigit {
                suit: c,
                input: self.input.to_string(),
                span: span.into(),
            });
        }

        for (digit, offset) in self.pending.drain(..) {
            let digit_span = Span::new(offset, offset + 1);
            let code = TileCode::new(digit, suit).map_err(|_| MjError::InvalidTile {
                code: format!("{}{}", digit, suit),
                input: self.input.to_string(),
                span: digit_span.into(),
            })?;
            self.tokens.push(Spanned::new(Token::Tile(code), digit_span));
        }
        Ok(())
    }

    fn annotate(&mut self, token: Token, c: char, span: Span) -> Result<()> {
        if !self.pending.is_empty() {
            return Err(MjError::DanglingDigits {
                found: c,
                digits: self.pending_digits(),
                input: self.input.to_string(),
                span: span.into(),
            });
        }
        self.tokens.push(Spanned::new(token, span));
        Ok(())
    }

    fn finish(self) -> Result<Vec<Spanned<Token>>> {
        if let Some(&(_, start)) = self.pending.first() {
            return Err(MjError::TrailingDigits {
                digits: self.pending_digits(),
                input: self.input.to_string(),
                span: Span::new(start, self.input.len()).into(),
            });
        }
        Ok(self.tokens)
    }

    fn pending_digits(&self) -> String {
        self.pending
            .iter()
            .map(|&(d, _)| char::from(b'0' + d))
            .collect()
    }

    fn unrecognized(&self, c: char, span: Span) -> MjError {
        MjError::UnrecognizedCharacter {
            found: c,
            input: self.input.to_string(),
            span: span.into(),
        }
    }
}

/// A parsed notation: the token sequence plus lookup helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notation {
    tokens: Vec<Token>,
}

impl Notation {
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            tokens: parse_notation(input)?,
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens drawn from the sprite sheet (face-up and face-down tiles).
    pub fn tiles(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|t| t.is_tile())
    }

    /// Sprite positions of every tile token, in order.
    pub fn positions(&self) -> Vec<(Token, Position)> {
        self.tiles()
            .filter_map(|token| match token {
                Token::Tile(code) => Some((*token, code.position())),
                Token::Back => Some((*token, BACK_POSITION)),
                _ => None,
            })
            .collect()
    }
}

impl FromStr for Notation {
    type Err = MjError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Writes the canonical form: every tile spelled out (`1m2m3m`).
impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
