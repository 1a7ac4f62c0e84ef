//! `#RRGGBB` parsing and alpha blending.
//!
//! Only the six-digit form is accepted. Anything else (three-digit shorthand,
//! named colors, `rgb()` syntax, stray whitespace) is treated as no color.

use std::fmt;

/// An opaque 24-bit color parsed from `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl HexColor {
    /// Parses `#RRGGBB` (hex digits in either case). Returns `None` otherwise.
    pub fn parse(input: &str) -> Option<Self> {
        if !is_hex_color(input) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&input[i..i + 2], 16).ok();
        Some(Self {
            r: channel(1)?,
            g: channel(3)?,
            b: channel(5)?,
        })
    }

    /// Blends this color with the given alpha.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            alpha,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A translucent color, rendered as CSS `rgba(r, g, b, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

/// `true` iff `input` is `#` followed by exactly six hex digits.
pub fn is_hex_color(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

/// Converts `#RRGGBB` to a translucent color; `None` for malformed input.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Option<Rgba> {
    HexColor::parse(hex).map(|c| c.with_alpha(alpha))
}
