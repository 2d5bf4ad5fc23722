//! Rasterizing colours into images.
//!
//! Only solid fills live here; gradients are handed to an external
//! renderer as [`crate::types::Gradient`] descriptors.

mod fill;
mod png;

pub use fill::solid_image;
pub use png::{scale_image, scaled_size, write_png};
