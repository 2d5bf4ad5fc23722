//! swatch - colour values, pixel sampling and gradient descriptors
//!
//! Builds normalized colours from hex strings and component arrays, reads
//! pixel colours out of decoded image buffers, and assembles gradient
//! descriptors for an external renderer.

pub mod cli;
pub mod error;
pub mod native;
pub mod output;
pub mod parser;
pub mod render;
pub mod sample;
pub mod types;

pub use error::{Result, SwatchError};
pub use native::{from_native, from_rgba8, to_native, to_rgba8};
pub use parser::GradientDef;
pub use render::{scale_image, scaled_size, solid_image, write_png};
pub use sample::{colour_at, colour_at_image, sample_file, PixelBuffer, Point};
pub use types::{
    build_gradient, Colour, ColourResultExt, Gradient, GradientBuilder, GradientKind,
};
