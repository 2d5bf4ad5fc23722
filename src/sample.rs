//! Pixel sampling from decoded image data.
//!
//! Pixels are read straight from the decoder's bytes: row-major, four
//! bytes per pixel in R, G, B, A order.
//!
//! Sampled colours keep their raw 0-255 byte values in every channel,
//! alpha included. Colours from [`Colour::from_hex`] and
//! [`Colour::from_components`] hold alpha as a 0-1 fraction instead.

use std::path::Path;

use image::{ImageError, RgbaImage};

use crate::error::{Result, SwatchError};
use crate::types::Colour;

/// Bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A position in image space. Fractional coordinates are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Borrowed view of decoded RGBA pixel data.
///
/// `data` is `None` when the decoder produced no bytes.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: Option<&'a [u8]>,
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            data: Some(data),
            width,
            height,
        }
    }

    /// A buffer whose decoder produced no bytes.
    pub fn missing(width: u32, height: u32) -> Self {
        Self {
            data: None,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether `point` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, point: Point) -> bool {
        (0.0..f64::from(self.width)).contains(&point.x)
            && (0.0..f64::from(self.height)).contains(&point.y)
    }

    /// Byte offset of the pixel under `point`, or `None` if it cannot be
    /// addressed.
    fn offset(&self, point: Point) -> Option<usize> {
        let x = point.x.trunc() as u64;
        let y = point.y.trunc() as u64;
        let bpp = BYTES_PER_PIXEL as u64;
        let row = u64::from(self.width).checked_mul(bpp)?.checked_mul(y)?;
        let offset = row.checked_add(x.checked_mul(bpp)?)?;
        usize::try_from(offset).ok()
    }
}

/// Read the colour at `point`.
///
/// The result keeps raw byte values (see the module docs).
pub fn colour_at(buffer: &PixelBuffer<'_>, point: Point) -> Result<Colour> {
    if !buffer.contains(point) {
        return Err(SwatchError::PointOutOfBounds {
            x: point.x,
            y: point.y,
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    let data = match buffer.data {
        Some(data) if !data.is_empty() => data,
        Some(_) => {
            return Err(SwatchError::EmptyImageData {
                reason: "pixel buffer is empty".to_string(),
            })
        }
        None => {
            return Err(SwatchError::EmptyImageData {
                reason: "decoder produced no pixel data".to_string(),
            })
        }
    };

    let pixel = buffer
        .offset(point)
        .and_then(|offset| data.get(offset..))
        .unwrap_or_default();
    let values: Vec<f32> = pixel
        .iter()
        .take(BYTES_PER_PIXEL)
        .map(|&byte| f32::from(byte))
        .collect();

    log::debug!(
        "sampled ({}, {}) in {}x{}: {:?}",
        point.x,
        point.y,
        buffer.width(),
        buffer.height(),
        values
    );

    Colour::from_components(&values, true)
}

/// Read the colour at `point` of a decoded image.
pub fn colour_at_image(image: &RgbaImage, point: Point) -> Result<Colour> {
    let buffer = PixelBuffer::new(image.as_raw(), image.width(), image.height());
    colour_at(&buffer, point)
}

/// Decode the image at `path` and read the colour at `point`.
pub fn sample_file(path: &Path, point: Point) -> Result<Colour> {
    let image = open_rgba(path)?;
    colour_at_image(&image, point)
}

/// Decode an image file into RGBA8 pixels.
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| match e {
        ImageError::IoError(io) => SwatchError::Io {
            path: path.to_path_buf(),
            message: io.to_string(),
        },
        other => SwatchError::EmptyImageData {
            reason: format!("failed to decode {}: {}", path.display(), other),
        },
    })?;

    Ok(image.to_rgba8())
}
