//! Parse command implementation.
//!
//! Prints the tokens of each notation, or the sprite positions of its tiles.

use clap::Args;

use crate::discovery::{Manifest, OutputFormat};
use crate::error::{MjError, Result};
use crate::output::{plural, Printer};
use crate::parser::Notation;
use crate::types::Token;

use super::position::{render_positions, TilePosition};

/// Parse notation strings into tokens
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Notation strings, e.g. "123m456p 11z"
    #[arg(required = true)]
    pub notations: Vec<String>,

    /// Output format (default: from manifest, else text)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print tile positions instead of tokens
    #[arg(long)]
    pub positions: bool,
}

pub fn run(args: ParseArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let format = args.format.unwrap_or(manifest.format);

    for input in &args.notations {
        let notation = Notation::parse(input)?;
        printer.status(
            "Parsed",
            &format!("{} from {:?}", plural(notation.len(), "token", "tokens"), input),
        );

        let out = if args.positions || format == OutputFormat::Css {
            render_positions(&tile_positions(&notation), format)?
        } else {
            render_tokens(notation.tokens(), format)?
        };
        println!("{}", out);
    }

    Ok(())
}

fn tile_positions(notation: &Notation) -> Vec<TilePosition> {
    notation
        .positions()
        .into_iter()
        .map(|(token, position)| TilePosition {
            tile: token.to_string(),
            position,
        })
        .collect()
}

/// Render tokens as text (space separated, gaps shown as `_`) or JSON.
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(tokens).map_err(|e| MjError::Output {
            message: format!("Failed to serialize tokens: {}", e),
        }),
        _ => Ok(tokens
            .iter()
            .map(|t| match t {
                Token::Space => "_".to_string(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")),
    }
}
