//! Color types and conversion utilities
//!
//! [`Color`] is the canonical value: three 8-bit channels, always opaque.
//! [`Hsl`] and [`Vec3`] are float views of a color used for input and output
//! in the corresponding notations. Converting them back to a [`Color`] always
//! goes through [`to_channel`], so no channel is ever produced by unchecked
//! arithmetic.

mod hsl;
mod rgb;
mod vec3;

pub use hsl::Hsl;
pub use rgb::Color;
pub use vec3::Vec3;

/// Scale a unit-range value to an 8-bit channel.
///
/// Rounds half away from zero and clamps to `0..=255`.
#[inline]
pub(crate) fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_channel_rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(1.0), 255);
    }

    #[test]
    fn test_to_channel_clamps() {
        assert_eq!(to_channel(-0.2), 0);
        assert_eq!(to_channel(1.7), 255);
    }
}
