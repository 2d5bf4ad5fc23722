//! Pick command implementation.
//!
//! Samples one pixel of an image file. Stdout gets the raw bytes and the
//! equivalent hex colour: `r g b a  #RRGGBBAA`.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::sample::{sample_file, Point};
use crate::types::Colour;

/// Sample the colour of one pixel in an image
#[derive(Args, Debug)]
pub struct PickArgs {
    /// Image file to sample
    #[arg(required = true)]
    pub file: PathBuf,

    /// Pixel position as X,Y
    #[arg(long, value_parser = super::parse_pair)]
    pub at: (f64, f64),
}

pub fn run(args: PickArgs, printer: &Printer) -> Result<()> {
    let point = Point::from(args.at);
    let colour = sample_file(&args.file, point)?;

    printer.status(
        "Sampled",
        &format!("({}, {}) from {}", point.x, point.y, display_path(&args.file)),
    );
    println!("{}", format_sample(colour));

    Ok(())
}

/// Format a sampled colour whose channels are raw bytes.
pub fn format_sample(sample: Colour) -> String {
    let normalized = Colour::rgba(sample.r, sample.g, sample.b, sample.a / 255.0, false);
    format!(
        "{} {} {} {}  {}",
        sample.r, sample.g, sample.b, sample.a, normalized
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_opaque_sample() {
        let sample = Colour::rgba(0.0, 0.0, 255.0, 255.0, true);
        assert_eq!(format_sample(sample), "0 0 255 255  #0000FF");
    }

    #[test]
    fn test_format_translucent_sample() {
        let sample = Colour::rgba(255.0, 0.0, 0.0, 128.0, true);
        assert_eq!(format_sample(sample), "255 0 0 128  #FF000080");
    }
}
