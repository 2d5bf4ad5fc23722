use image::RgbaImage;

use crate::error::{Result, SwatchError};
use crate::native::to_rgba8;
use crate::types::Colour;

/// Create an image of the given size filled with `colour`.
pub fn solid_image(colour: Colour, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(SwatchError::Parse {
            message: format!("Image size must be non-zero, got {}x{}", width, height),
            help: Some("Both width and height must be at least 1".to_string()),
        });
    }

    if !colour.is_normalized() {
        log::warn!("{:?} has channels outside 0..=1; clamping", colour);
    }

    Ok(RgbaImage::from_pixel(width, height, to_rgba8(colour)))
}
