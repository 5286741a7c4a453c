//! Text rendering of colors in each supported notation
//!
//! All output is locale-independent: the decimal separator is always `.` and
//! rounding is half away from zero, matching the color conversions.

use std::fmt;

use crate::color::Color;

/// The four notations a color can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Vec3,
    Hsl,
}

impl ColorFormat {
    /// Display order used for query results.
    pub const ALL: [ColorFormat; 4] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Vec3,
        ColorFormat::Hsl,
    ];

    /// Short lowercase label shown next to a formatted value.
    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Vec3 => "vec3",
            ColorFormat::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Render `color` in the given notation.
///
/// # Example
/// ```
/// use color_model::{format, Color, ColorFormat};
///
/// let color = Color::from_rgb(255, 0, 0);
/// assert_eq!(format(color, ColorFormat::Hex), "#ff0000");
/// assert_eq!(format(color, ColorFormat::Rgb), "255, 0, 0");
/// assert_eq!(format(color, ColorFormat::Vec3), "1.0, 0.0, 0.0");
/// assert_eq!(format(color, ColorFormat::Hsl), "0.0, 100.0%, 50.0%");
/// ```
pub fn format(color: Color, notation: ColorFormat) -> String {
    match notation {
        ColorFormat::Hex => to_hex_string(color),
        ColorFormat::Rgb => to_rgb_string(color),
        ColorFormat::Vec3 => to_vec3_string(color),
        ColorFormat::Hsl => to_hsl_string(color),
    }
}

/// `#rrggbb`
pub fn to_hex_string(color: Color) -> String {
    color.to_hex()
}

/// `R, G, B`
pub fn to_rgb_string(color: Color) -> String {
    format!("{}, {}, {}", color.r(), color.g(), color.b())
}

/// `r, g, b` with each component in `0.0###` style.
pub fn to_vec3_string(color: Color) -> String {
    let v = color.to_vec3();
    format!(
        "{}, {}, {}",
        trimmed_decimal(v.r, 4),
        trimmed_decimal(v.g, 4),
        trimmed_decimal(v.b, 4)
    )
}

/// `H, S%, L%` with exactly one decimal each.
pub fn to_hsl_string(color: Color) -> String {
    let hsl = color.to_hsl();
    format!(
        "{:.1}, {:.1}%, {:.1}%",
        round_to(hsl.h, 1),
        round_to(hsl.s, 1),
        round_to(hsl.l, 1)
    )
}

/// Round half away from zero to `places` decimals.
///
/// `format!("{:.N}")` alone breaks exact ties to even, so values are rounded
/// here first and only then printed.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// At least one and at most `max_places` decimals, trailing zeros trimmed.
fn trimmed_decimal(value: f64, max_places: usize) -> String {
    let mut s = format!("{:.*}", max_places, round_to(value, max_places as i32));
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}
