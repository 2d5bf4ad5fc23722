use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("Expected 4 colour components (r, g, b, a), got {count}")]
    #[diagnostic(
        code(swatch::value_count),
        help("Pass exactly four values: red, green, blue, alpha")
    )]
    InvalidValueCount { count: usize },

    #[error("Invalid hex colour: {input}")]
    #[diagnostic(code(swatch::hex), help("Use #RGB or #RRGGBB format"))]
    InvalidHexFormat { input: String },

    #[error("Point ({x}, {y}) is outside the {width}x{height} image")]
    #[diagnostic(code(swatch::bounds))]
    PointOutOfBounds {
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },

    #[error("No image data available: {reason}")]
    #[diagnostic(code(swatch::image_data))]
    EmptyImageData { reason: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
