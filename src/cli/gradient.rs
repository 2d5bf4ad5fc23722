//! Gradient command implementation.
//!
//! Builds a gradient descriptor from colours on the command line and/or a
//! `*.gradient.yaml` definition, then prints it to stdout.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::parser::GradientDef;
use crate::types::{Gradient, GradientKind};

/// Output encoding for the descriptor.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

/// Build a gradient descriptor
#[derive(Args, Debug, Default)]
pub struct GradientArgs {
    /// Stop colours in order; replaces the colours from --file
    pub colours: Vec<String>,

    /// Gradient definition file to start from
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Gradient kind (axial, radial, conic)
    #[arg(long)]
    pub kind: Option<GradientKind>,

    /// Start point as X,Y in unit coordinates
    #[arg(long, value_parser = super::parse_pair)]
    pub start: Option<(f64, f64)>,

    /// End point as X,Y in unit coordinates
    #[arg(long, value_parser = super::parse_pair)]
    pub end: Option<(f64, f64)>,

    /// Stop locations, comma separated
    #[arg(long, value_delimiter = ',')]
    pub locations: Option<Vec<f32>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

pub fn run(args: GradientArgs, printer: &Printer) -> Result<()> {
    if let Some(path) = &args.file {
        printer.status("Loading", &display_path(path));
    }

    let format = args.format;
    let gradient = build(args)?;
    if gradient.len() < 2 {
        printer.warning(
            "Warning",
            &format!("gradient has {}", plural(gradient.len(), "colour", "colours")),
        );
    }

    println!("{}", encode(&gradient, format)?);
    printer.status(
        "Built",
        &format!(
            "{} gradient with {}",
            kind_name(gradient.kind),
            plural(gradient.len(), "stop", "stops")
        ),
    );
    Ok(())
}

/// Resolve arguments into a gradient. Command-line values override the file.
pub fn build(args: GradientArgs) -> Result<Gradient> {
    let mut def = match &args.file {
        Some(path) => GradientDef::load(path)?,
        None => GradientDef::default(),
    };
    if !args.colours.is_empty() {
        def.colours = args.colours;
    }
    let builder = def.into_builder()?;

    let overrides = (args.kind, args.start, args.end, args.locations);
    Ok(builder
        .configure(|mut builder| {
            let (kind, start, end, locations) = overrides;
            if let Some(kind) = kind {
                builder = builder.kind(kind);
            }
            if let Some((x, y)) = start {
                builder = builder.start_point(x as f32, y as f32);
            }
            if let Some((x, y)) = end {
                builder = builder.end_point(x as f32, y as f32);
            }
            if let Some(locations) = locations {
                builder = builder.locations(locations);
            }
            builder
        })
        .build())
}

/// Serialize a gradient in the requested format.
pub fn encode(gradient: &Gradient, format: Format) -> Result<String> {
    let encoded = match format {
        Format::Json => serde_json::to_string_pretty(gradient).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::to_string(gradient).map_err(|e| e.to_string()),
    };

    encoded.map_err(|message| SwatchError::Parse {
        message: format!("Failed to encode gradient: {}", message),
        help: None,
    })
}

fn kind_name(kind: GradientKind) -> &'static str {
    match kind {
        GradientKind::Axial => "axial",
        GradientKind::Radial => "radial",
        GradientKind::Conic => "conic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, GradientBuilder};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn colours(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_from_args() {
        let gradient = build(GradientArgs {
            colours: colours(&["#F00", "#00F"]),
            kind: Some(GradientKind::Conic),
            start: Some((0.0, 0.5)),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(gradient.kind, GradientKind::Conic);
        assert_eq!(gradient.start_point, [0.0, 0.5]);
        assert_eq!(
            gradient.colours,
            vec![Colour::new(1.0, 0.0, 0.0, 1.0), Colour::new(0.0, 0.0, 1.0, 1.0)]
        );
    }

    #[test]
    fn test_build_empty() {
        let gradient = build(GradientArgs::default()).unwrap();
        assert!(gradient.is_empty());
    }

    #[test]
    fn test_build_bad_colour() {
        let result = build(GradientArgs {
            colours: colours(&["#F00", "#12G456"]),
            ..Default::default()
        });
        assert!(matches!(result, Err(SwatchError::InvalidHexFormat { .. })));
    }

    #[test]
    fn test_args_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dusk.gradient.yaml");
        std::fs::write(
            &path,
            "kind: radial\ncolours: ['#000', '#fff']\nlocations: [0.0, 1.0]\nend: [1.0, 1.0]\n",
        )
        .unwrap();

        let gradient = build(GradientArgs {
            colours: colours(&["#fff", "#000", "#fff"]),
            file: Some(path.clone()),
            locations: Some(vec![0.0, 0.5, 1.0]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(gradient.kind, GradientKind::Radial);
        assert_eq!(gradient.end_point, [1.0, 1.0]);
        assert_eq!(gradient.colours, vec![Colour::WHITE, Colour::BLACK, Colour::WHITE]);
        assert_eq!(gradient.locations, Some(vec![0.0, 0.5, 1.0]));

        let from_file = build(GradientArgs {
            file: Some(path),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(from_file.colours, vec![Colour::BLACK, Colour::WHITE]);
    }

    #[test]
    fn test_encode_yaml() {
        let gradient = GradientBuilder::new([Colour::BLACK]).build();
        let yaml = encode(&gradient, Format::Yaml).unwrap();
        assert!(yaml.contains("kind: axial"));
        let back: Gradient = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, gradient);
    }

    #[test]
    fn test_encode_json() {
        let gradient = GradientBuilder::new([Colour::WHITE]).build();
        let json = encode(&gradient, Format::Json).unwrap();
        let back: Gradient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gradient);
    }
}
