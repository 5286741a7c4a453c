//! 8-bit RGB color type
//!
//! The canonical in-memory color. Every other notation converts into and out
//! of this type, and its lowercase hex form is the identity used for caching.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// An opaque color with three 8-bit channels.
///
/// Fields are private: a `Color` is only built through the conversion
/// functions, which all validate or clamp their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use color_model::Color;
    /// let green = Color::from_rgb(99, 197, 34);
    /// assert_eq!(green.to_hex(), "#63c522");
    /// ```
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_rgb(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Parse a hex color string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_model::Color;
    ///
    /// let red = Color::from_hex("#F00").unwrap();
    /// assert_eq!(red, Color::from_rgb(255, 0, 0));
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>();

        match s.chars().count() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let d = digits?;
                Ok(Self::from_rgb(d[0] * 17, d[1] * 17, d[2] * 17))
            }
            6 => {
                let d = digits?;
                Ok(Self::from_rgb(
                    (d[0] << 4) | d[1],
                    (d[2] << 4) | d[3],
                    (d[4] << 4) | d[5],
                ))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }

    /// Canonical hex form: `#rrggbb` with lowercase digits.
    pub fn to_hex(self) -> String {
        format!("#{}", self.hex_digits())
    }

    /// The six lowercase hex digits without the leading `#`.
    pub fn hex_digits(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
