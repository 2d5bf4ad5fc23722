//! Hex command implementation.
//!
//! Parses hex colours and prints normalized components, one per line:
//! `#RRGGBB  r g b a`.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{Colour, ColourResultExt};

/// Parse hex colours and print their components
#[derive(Args, Debug)]
pub struct HexArgs {
    /// Colours as #RGB or #RRGGBB (the # is optional)
    #[arg(required = true)]
    pub colours: Vec<String>,

    /// Print white for invalid colours instead of failing
    #[arg(long)]
    pub or_white: bool,
}

pub fn run(args: HexArgs, printer: &Printer) -> Result<()> {
    let colours = resolve(&args.colours, args.or_white)?;

    for colour in &colours {
        println!("{}", format_components(*colour));
    }

    printer.status("Parsed", &plural(colours.len(), "colour", "colours"));
    Ok(())
}

/// Parse every input, stopping at the first failure unless `or_white`.
fn resolve(inputs: &[String], or_white: bool) -> Result<Vec<Colour>> {
    inputs
        .iter()
        .map(|input| {
            let parsed = Colour::from_hex(input);
            if or_white {
                Ok(parsed.or_white())
            } else {
                parsed
            }
        })
        .collect()
}

/// `#RRGGBB  r g b a` with four decimals per channel.
pub fn format_components(colour: Colour) -> String {
    format!(
        "{}  {:.4} {:.4} {:.4} {:.4}",
        colour, colour.r, colour.g, colour.b, colour.a
    )
}
