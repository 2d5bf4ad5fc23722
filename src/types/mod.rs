//! Core value types for swatch.
//!
//! - `Colour` - four-channel colour values and their parsers
//! - `Gradient` - ordered colour stops for an external renderer

pub(crate) mod colour;
mod gradient;

pub use colour::{Colour, ColourResultExt};
pub use gradient::{build_gradient, Gradient, GradientBuilder, GradientKind, DEFAULT_END, DEFAULT_START};
