//! Position command implementation.
//!
//! Maps tile codes to sprite-sheet offsets.

use clap::Args;
use serde::Serialize;

use crate::discovery::{Manifest, OutputFormat};
use crate::error::{MjError, Result};
use crate::position::{map_tiles, Position};

/// Look up sprite-sheet positions of tile codes
#[derive(Args, Debug)]
pub struct PositionArgs {
    /// Tile codes, e.g. 1m 7z o
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Output format (default: from manifest, else text)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,
}

/// A tile code paired with its position, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct TilePosition {
    pub tile: String,
    #[serde(flatten)]
    pub position: Position,
}

pub fn run(args: PositionArgs, manifest: &Manifest) -> Result<()> {
    let format = args.format.unwrap_or(manifest.format);
    let positions = map_tiles(&args.codes)?;

    let entries: Vec<TilePosition> = args
        .codes
        .into_iter()
        .zip(positions)
        .map(|(tile, position)| TilePosition { tile, position })
        .collect();

    println!("{}", render_positions(&entries, format)?);
    Ok(())
}

/// Render positions in the requested format.
pub fn render_positions(entries: &[TilePosition], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|e| format!("{} {} {}", e.tile, e.position.x, e.position.y))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Css => Ok(entries
            .iter()
            .map(|e| format!("{}: {}", e.tile, e.position.to_css()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(entries).map_err(|e| MjError::Output {
            message: format!("Failed to serialize positions: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::map_tile;

    fn entries(codes: &[&str]) -> Vec<TilePosition> {
        codes
            .iter()
            .map(|c| TilePosition {
                tile: c.to_string(),
                position: map_tile(c).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_render_text() {
        let out = render_positions(&entries(&["1m", "3p", "o"]), OutputFormat::Text).unwrap();
        assert_eq!(out, "1m 0 0\n3p -60 -44\no -120 -132");
    }

    #[test]
    fn test_render_css() {
        let out = render_positions(&entries(&["7z"]), OutputFormat::Css).unwrap();
        assert_eq!(out, "7z: -180px -132px");
    }

    #[test]
    fn test_render_json() {
        let out = render_positions(&entries(&["o"]), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "tile": "o", "x": -120, "y": -132, "isBack": true }])
        );
    }
}
