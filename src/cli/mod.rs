pub mod completions;
pub mod fill;
pub mod gradient;
pub mod hex;
pub mod pick;

use clap::{Parser, Subcommand};

/// swatch - colour parsing, pixel sampling and gradient descriptors
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse hex colours and print their components
    Hex(hex::HexArgs),

    /// Sample the colour of one pixel in an image
    Pick(pick::PickArgs),

    /// Build a gradient descriptor
    Gradient(gradient::GradientArgs),

    /// Write a solid-colour PNG
    Fill(fill::FillArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Parse an "X,Y" pair of numbers.
pub fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y (e.g. 0.5,1), got '{}'", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid number '{}' in '{}'", x.trim(), s))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid number '{}' in '{}'", y.trim(), s))?;
    Ok((x, y))
}
