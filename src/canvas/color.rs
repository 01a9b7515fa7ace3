//! RGBA color values with hex notation parsing

use crate::io::error::{Result, invalid_parameter};
use std::fmt;

/// RGBA color with 8-bit channels
///
/// Distinctness for color counting is value equality after parsing, so
/// `#fff` and `#ffffff` are the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel, 0 is fully transparent
    pub a: u8,
}

impl Rgba {
    /// Create a color from explicit channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels as a byte array in RGBA order
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether the color is fully transparent
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa` notation
    ///
    /// The leading `#` is optional. Shorthand digits are expanded, so
    /// `#f0a` parses as `#ff00aa`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string has an unsupported length or contains
    /// non-hexadecimal digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => {
                return Err(invalid_parameter(
                    "color",
                    &hex,
                    &"expected #rgb, #rrggbb, or #rrggbbaa notation",
                ));
            }
        };

        let mut channels = [0_u8, 0, 0, 255];
        for (index, slot) in channels.iter_mut().enumerate().take(expanded.len() / 2) {
            let pair = expanded
                .get(index * 2..index * 2 + 2)
                .ok_or_else(|| invalid_parameter("color", &hex, &"truncated hex digits"))?;
            *slot = u8::from_str_radix(pair, 16)
                .map_err(|e| invalid_parameter("color", &hex, &e))?;
        }

        let [r, g, b, a] = channels;
        Ok(Self::new(r, g, b, a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}
