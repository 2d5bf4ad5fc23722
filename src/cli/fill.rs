//! Fill command implementation.
//!
//! Writes a PNG filled with a single colour.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SwatchError};
use crate::output::{display_path, Printer};
use crate::render::{scaled_size, solid_image, write_png};
use crate::types::Colour;

/// Write a solid-colour PNG
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Fill colour as #RGB or #RRGGBB
    #[arg(required = true)]
    pub colour: String,

    /// Image size as WxH (e.g. 16x16)
    #[arg(long)]
    pub size: String,

    /// Output PNG path
    #[arg(long, short)]
    pub output: PathBuf,

    /// Integer scale factor
    #[arg(long, default_value_t = 1)]
    pub scale: u32,

    /// Alpha for the fill, 0.0 to 1.0
    #[arg(long)]
    pub alpha: Option<f32>,
}

pub fn run(args: FillArgs, printer: &Printer) -> Result<()> {
    let mut colour = Colour::from_hex(&args.colour)?;
    if let Some(alpha) = args.alpha {
        colour = colour.with_alpha(alpha.clamp(0.0, 1.0));
    }
    let (width, height) = parse_dimensions(&args.size)?;
    let (out_width, out_height) = scaled_size(width, height, args.scale)?;

    let image = solid_image(colour, width, height)?;
    write_png(&image, &args.output, args.scale)?;

    printer.status(
        "Wrote",
        &format!(
            "{} {}x{} {}",
            colour,
            out_width,
            out_height,
            printer.dim(&display_path(&args.output))
        ),
    );
    Ok(())
}

/// Parse a "WxH" dimension string into (width, height).
fn parse_dimensions(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(|| SwatchError::Parse {
        message: format!("Invalid dimensions '{}': expected WxH (e.g. 16x16)", s),
        help: Some("Use the format WxH, for example: 16x16, 8x16".to_string()),
    })?;

    let w: u32 = w.parse().map_err(|_| SwatchError::Parse {
        message: format!("Invalid width '{}' in dimensions '{}'", w, s),
        help: Some("Width must be a positive integer".to_string()),
    })?;

    let h: u32 = h.parse().map_err(|_| SwatchError::Parse {
        message: format!("Invalid height '{}' in dimensions '{}'", h, s),
        help: Some("Height must be a positive integer".to_string()),
    })?;

    Ok((w, h))
}
