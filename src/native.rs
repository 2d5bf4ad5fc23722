//! Conversions between [`Colour`] and the colour types of the rendering
//! and image crates.
//!
//! Renderers take `palette::Srgba<f32>`; decoded images use
//! `image::Rgba<u8>`. Conversions only happen here, at the boundary.

use image::Rgba;
use palette::Srgba;

use crate::types::colour::quantize;
use crate::types::Colour;

/// Convert to the renderer colour type. Channels are passed through as-is.
pub fn to_native(colour: Colour) -> Srgba<f32> {
    Srgba::new(colour.r, colour.g, colour.b, colour.a)
}

/// Read back a renderer colour.
///
/// Renderer channels are already normalized, so they are kept raw.
pub fn from_native(native: Srgba<f32>) -> Colour {
    let (r, g, b, a) = native.into_components();
    Colour::rgba(r, g, b, a, true)
}

impl From<Srgba<f32>> for Colour {
    fn from(native: Srgba<f32>) -> Self {
        from_native(native)
    }
}

/// Quantize to an 8-bit image pixel, clamping each channel.
pub fn to_rgba8(colour: Colour) -> Rgba<u8> {
    Rgba(colour.components().map(quantize))
}

/// Normalize an 8-bit image pixel, alpha included.
pub fn from_rgba8(pixel: Rgba<u8>) -> Colour {
    let [r, g, b, a] = pixel.0.map(f32::from);
    Colour::rgba(r, g, b, a / 255.0, false)
}
