//! HSL (hue, saturation, lightness) view of a color

use super::rgb::Color;
use super::to_channel;

/// A color in HSL notation.
///
/// Values are unrounded. Hue is in degrees `0.0..360.0`, saturation and
/// lightness are percentages `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Piecewise channel evaluation for a hue offset `t`.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl Color {
    /// Create a color from HSL components.
    ///
    /// # Arguments
    /// * `h` - Hue in degrees (0..=360)
    /// * `s` - Saturation in percent (0..=100)
    /// * `l` - Lightness in percent (0..=100)
    ///
    /// # Example
    /// ```
    /// use color_model::Color;
    /// assert_eq!(Color::from_hsl(120.0, 100.0, 25.0), Color::from_rgb(0, 128, 0));
    /// ```
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h / 360.0;
        let s = s / 100.0;
        let l = l / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Self::from_rgb(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Extract hue, saturation and lightness.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r() as f64 / 255.0;
        let g = self.g() as f64 / 255.0;
        let b = self.b() as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(sector * 60.0, s * 100.0, l * 100.0)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::from_hsl(hsl.h, hsl.s, hsl.l)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}
