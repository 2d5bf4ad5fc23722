//! PNG output with optional integer scaling.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, SwatchError};

/// Dimensions of a `width`x`height` image after integer scaling.
///
/// A scale of 0 counts as 1.
pub fn scaled_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32)> {
    let scale = scale.max(1);
    match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(SwatchError::Parse {
            message: format!("{}x{} scaled by {} is too large", width, height, scale),
            help: Some("Use a smaller size or scale factor".to_string()),
        }),
    }
}

/// Scale an image by an integer factor.
///
/// Uses nearest-neighbour filtering so edges stay crisp.
pub fn scale_image(image: &RgbaImage, scale: u32) -> Result<RgbaImage> {
    let (width, height) = scaled_size(image.width(), image.height(), scale)?;
    if scale <= 1 {
        return Ok(image.clone());
    }

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        *image.get_pixel(x / scale, y / scale)
    }))
}

/// Write an image to a PNG file.
///
/// # Arguments
///
/// * `image` - The pixels to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (0 and 1 = no scaling)
pub fn write_png(image: &RgbaImage, path: &Path, scale: u32) -> Result<()> {
    let scaled = scale_image(image, scale)?;

    scaled.save(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    log::debug!(
        "wrote {}x{} PNG to {}",
        scaled.width(),
        scaled.height(),
        path.display()
    );

    Ok(())
}
