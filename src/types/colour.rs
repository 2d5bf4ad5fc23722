//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// A four-channel colour value.
///
/// Channels are normally in `0.0..=1.0`. Values built with `keep_raw`
/// are stored exactly as given, which is how sampled pixels keep their
/// 0-255 byte values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    /// Create a colour from channels that are already normalized.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black, the zero colour.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// White (the fallback for [`ColourResultExt::or_white`]).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a colour from four scalars.
    ///
    /// Unless `keep_raw` is set, red, green and blue are taken as 0-255
    /// values and divided by 255. Alpha is always stored as given.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32, keep_raw: bool) -> Self {
        if keep_raw {
            Self::new(r, g, b, a)
        } else {
            Self::new(r / 255.0, g / 255.0, b / 255.0, a)
        }
    }

    /// Create a colour from a slice of exactly four components.
    pub fn from_components(values: &[f32], keep_raw: bool) -> Result<Self> {
        match *values {
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a, keep_raw)),
            _ => Err(SwatchError::InvalidValueCount {
                count: values.len(),
            }),
        }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The `#` is optional. Alpha is always 1.0.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || SwatchError::InvalidHexFormat {
            input: s.to_string(),
        };

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded = match hex.len() {
            // #RGB -> #RRGGBB
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };

        let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        let r = ((value >> 16) & 0xFF) as f32;
        let g = ((value >> 8) & 0xFF) as f32;
        let b = (value & 0xFF) as f32;

        Ok(Self::rgba(r, g, b, 1.0, false))
    }

    /// The alpha channel.
    pub fn alpha(self) -> f32 {
        self.a
    }

    /// Copy of this colour with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Channels as an array in r, g, b, a order.
    pub fn components(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check that every channel is finite and within `0.0..=1.0`.
    pub fn is_normalized(self) -> bool {
        self.components()
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    ///
    /// Channels are clamped to `0.0..=1.0` first, so raw byte-range
    /// colours saturate.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.components().map(quantize);
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Map a normalized channel onto a byte.
pub(crate) fn quantize(channel: f32) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Opt-in fallbacks for fallible colour construction.
///
/// The error is logged, never returned.
pub trait ColourResultExt {
    /// Substitute `fallback` on failure.
    fn or_colour(self, fallback: Colour) -> Colour;

    /// Substitute [`Colour::WHITE`] on failure.
    fn or_white(self) -> Colour
    where
        Self: Sized,
    {
        self.or_colour(Colour::WHITE)
    }
}

impl ColourResultExt for Result<Colour> {
    fn or_colour(self, fallback: Colour) -> Colour {
        self.unwrap_or_else(|e| {
            log::warn!("{}; using {}", e, fallback);
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hex_fails(s: &str) {
        match Colour::from_hex(s) {
            Err(SwatchError::InvalidHexFormat { input }) => assert_eq!(input, s),
            other => panic!("expected InvalidHexFormat for {:?}, got {:?}", s, other),
        }
    }

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::new(1.0, 0.0, 0.0, 1.0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgba(26.0, 26.0, 46.0, 1.0, false));
    }

    #[test]
    fn test_from_hex_3digit() {
        assert_eq!(
            Colour::from_hex("ABC").unwrap(),
            Colour::from_hex("AABBCC").unwrap()
        );
        assert_eq!(Colour::from_hex("#F00").unwrap(), Colour::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_hex_no_hash() {
        assert_eq!(
            Colour::from_hex("00FF00").unwrap(),
            Colour::new(0.0, 1.0, 0.0, 1.0)
        );
    }

    #[test]
    fn test_from_hex_channels_are_byte_fractions() {
        for hex in ["000000", "FFFFFF", "7f3a10", "#0a0B0c", "123456"] {
            let c = Colour::from_hex(hex).unwrap();
            assert_eq!(c.a, 1.0);
            for channel in [c.r, c.g, c.b] {
                let byte = channel * 255.0;
                assert!((0.0..=255.0).contains(&byte));
                assert!((byte - byte.round()).abs() < 1e-3, "{} -> {}", hex, byte);
            }
        }
    }

    #[test]
    fn test_from_hex_wrong_length() {
        for s in ["1", "12", "1234", "12345", "1234567", "", "#", "#FF000080"] {
            assert_hex_fails(s);
        }
    }

    #[test]
    fn test_from_hex_invalid_digits() {
        assert_hex_fails("12G456");
        assert_hex_fails("#GGG");
        assert_hex_fails("+12345");
        assert_hex_fails(" FFF");
        assert_hex_fails("##FFF");
    }

    #[test]
    fn test_from_components_divides_rgb() {
        let c = Colour::from_components(&[255.0, 0.0, 0.0, 1.0], false).unwrap();
        assert_eq!(c, Colour::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_components_keep_raw() {
        let c = Colour::from_components(&[255.0, 0.0, 0.0, 1.0], true).unwrap();
        assert_eq!(c, Colour::new(255.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_components_alpha_never_divided() {
        let c = Colour::from_components(&[0.0, 0.0, 0.0, 0.5], false).unwrap();
        assert_eq!(c.alpha(), 0.5);
    }

    #[test]
    fn test_from_components_wrong_count() {
        for values in [&[1.0, 2.0, 3.0][..], &[1.0, 2.0, 3.0, 4.0, 5.0][..], &[][..]] {
            match Colour::from_components(values, false) {
                Err(SwatchError::InvalidValueCount { count }) => assert_eq!(count, values.len()),
                other => panic!("expected InvalidValueCount, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_with_alpha() {
        let c = Colour::WHITE.with_alpha(0.25);
        assert_eq!(c, Colour::new(1.0, 1.0, 1.0, 0.25));
        assert_eq!(Colour::WHITE.alpha(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::from_hex("#FF0000").unwrap()), "#FF0000");
        assert_eq!(Colour::new(1.0, 0.0, 0.0, 0.5).to_hex(), "#FF000080");
        assert_eq!(Colour::rgba(255.0, 0.0, 0.0, 255.0, true).to_hex(), "#FF0000");
    }

    #[test]
    fn test_from_str() {
        let c: Colour = "#abc".parse().unwrap();
        assert_eq!(c.to_hex(), "#AABBCC");
        assert!("nope".parse::<Colour>().is_err());
    }

    #[test]
    fn test_is_normalized() {
        assert!(Colour::WHITE.is_normalized());
        assert!(!Colour::rgba(255.0, 0.0, 0.0, 1.0, true).is_normalized());
        assert!(!Colour::new(f32::NAN, 0.0, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn test_or_white() {
        assert_eq!(Colour::from_hex("12G456").or_white(), Colour::WHITE);
        assert_eq!(
            Colour::from_hex("000").or_white(),
            Colour::BLACK
        );
    }

    #[test]
    fn test_or_colour() {
        let c = Colour::from_components(&[1.0], false).or_colour(Colour::CLEAR);
        assert_eq!(c, Colour::CLEAR);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::default(), Colour::CLEAR);
        assert_eq!(Colour::BLACK.to_hex(), "#000000");
        assert_eq!(Colour::WHITE.to_hex(), "#FFFFFF");
    }
}
