//! The 16-bit RGBA color value used throughout the engine.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with four 16-bit channels.
///
/// Equality and hashing are by exact channel values, which makes `Color`
/// usable as a cache key. Alpha is carried along but never inspected by
/// distance or matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0..=0xffff)
    pub r: u16,
    /// Green channel (0..=0xffff)
    pub g: u16,
    /// Blue channel (0..=0xffff)
    pub b: u16,
    /// Alpha channel (0..=0xffff, 0xffff is opaque)
    pub a: u16,
}

impl Color {
    /// Create a color from 16-bit channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    ///
    /// Each byte is widened by replication, so `0xff` becomes `0xffff`.
    ///
    /// # Example
    /// ```
    /// use palette_engine::Color;
    /// let white = Color::from_rgb8(255, 255, 255);
    /// assert_eq!(white.r, 0xffff);
    /// assert_eq!(white.a, 0xffff);
    /// ```
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: widen(r),
            g: widen(g),
            b: widen(b),
            a: u16::MAX,
        }
    }

    /// Create a color from 8-bit RGBA channels.
    #[inline]
    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: widen(rgba[0]),
            g: widen(rgba[1]),
            b: widen(rgba[2]),
            a: widen(rgba[3]),
        }
    }

    /// Parse a strict `#rrggbb` hex string into an opaque color.
    ///
    /// The leading `#` is required and exactly six hex digits must follow.
    /// Case is ignored.
    ///
    /// # Example
    /// ```
    /// use palette_engine::Color;
    /// let red = Color::from_hex("#ff0000").unwrap();
    /// assert_eq!(red, Color::from_rgb8(255, 0, 0));
    /// assert!(Color::from_hex("red").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        let count = digits.chars().count();
        if count != 6 {
            return Err(ParseColorError::InvalidLength(count));
        }
        let mut value = 0u32;
        for ch in digits.chars() {
            let digit = ch.to_digit(16).ok_or(ParseColorError::InvalidDigit(ch))?;
            value = value << 4 | digit;
        }
        Ok(Self::from_rgb8(
            (value >> 16) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Render as lowercase `#rrggbb`, dropping alpha.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// High byte of each color channel.
    #[inline]
    pub const fn to_rgb8(self) -> [u8; 3] {
        [(self.r >> 8) as u8, (self.g >> 8) as u8, (self.b >> 8) as u8]
    }

    /// The opaque 8-bit color this one renders as in `#rrggbb` or JPEG.
    ///
    /// Colors that differ only below the high byte, or only in alpha,
    /// collapse to the same value.
    #[inline]
    pub const fn quantized(self) -> Self {
        let [r, g, b] = self.to_rgb8();
        Self::from_rgb8(r, g, b)
    }

    /// The same color with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u16) -> Self {
        Self { a, ..self }
    }
}

#[inline]
const fn widen(v: u8) -> u16 {
    (v as u16) << 8 | v as u16
}

impl From<image::Rgba<u16>> for Color {
    fn from(px: image::Rgba<u16>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb(c.to_rgb8())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8_widens_by_replication() {
        let c = Color::from_rgb8(0x12, 0x34, 0xab);
        assert_eq!(c, Color::new(0x1212, 0x3434, 0xabab, 0xffff));
    }

    #[test]
    fn test_from_hex_lower_and_upper_case() {
        let lower = Color::from_hex("#1a2b3c").unwrap();
        let upper = Color::from_hex("#1A2B3C").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, Color::from_rgb8(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_from_hex_requires_hash() {
        assert_eq!(Color::from_hex("red"), Err(ParseColorError::MissingHash));
        assert_eq!(Color::from_hex("ff0000"), Err(ParseColorError::MissingHash));
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert_eq!(
            Color::from_hex("#ff00"),
            Err(ParseColorError::InvalidLength(4))
        );
        assert_eq!(
            Color::from_hex("#ff000000"),
            Err(ParseColorError::InvalidLength(8))
        );
    }

    #[test]
    fn test_from_hex_rejects_non_hex_digits() {
        assert_eq!(
            Color::from_hex("#gg0000"),
            Err(ParseColorError::InvalidDigit('g'))
        );
        assert_eq!(
            Color::from_hex("#+12345"),
            Err(ParseColorError::InvalidDigit('+'))
        );
    }

    #[test]
    fn test_to_hex_drops_alpha_and_lowercases() {
        let c = Color::from_rgb8(0xAB, 0xCD, 0xEF).with_alpha(0);
        assert_eq!(c.to_hex(), "#abcdef");
        assert_eq!(c.to_string(), "#abcdef");
    }

    #[test]
    fn test_to_rgb8_uses_high_byte() {
        let c = Color::new(0x12ff, 0x0001, 0xff00, 0);
        assert_eq!(c.to_rgb8(), [0x12, 0x00, 0xff]);
    }

    #[test]
    fn test_quantized_keeps_high_byte_and_drops_alpha() {
        let a = Color::new(0x1200, 0x34ff, 0x5601, 0);
        let b = Color::new(0x12ff, 0x3400, 0x56fe, 0xffff);
        assert_eq!(a.quantized(), Color::from_rgb8(0x12, 0x34, 0x56));
        assert_eq!(a.quantized(), b.quantized());
        assert_eq!(a.quantized().to_hex(), a.to_hex());
    }

    #[test]
    fn test_parse_via_from_str() {
        let c: Color = "#00ff00".parse().unwrap();
        assert_eq!(c, Color::from_rgb8(0, 255, 0));
    }
}
