//! Normalized float triplet view of a color (shader `vec3` style)

use super::rgb::Color;
use super::to_channel;

/// A color as three floats in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Vec3 {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    /// Create a color from normalized components.
    ///
    /// Each component is scaled by 255, rounded half away from zero and
    /// clamped.
    ///
    /// # Example
    /// ```
    /// use color_model::Color;
    /// assert_eq!(Color::from_vec3(1.0, 0.5, 0.0), Color::from_rgb(255, 128, 0));
    /// ```
    pub fn from_vec3(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgb(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Each channel divided by 255.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            self.r() as f64 / 255.0,
            self.g() as f64 / 255.0,
            self.b() as f64 / 255.0,
        )
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Color::from_vec3(v.r, v.g, v.b)
    }
}
