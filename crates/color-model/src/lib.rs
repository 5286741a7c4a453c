//! color-model: 8-bit RGB colors and their textual representations
//!
//! This library holds the canonical in-memory color value used by colorq and
//! the conversions between it and the other supported notations.
//!
//! # Quick Start
//!
//! ```
//! use color_model::{Color, ColorFormat};
//!
//! let red: Color = "#F00".parse().unwrap();
//! assert_eq!(red.to_hex(), "#ff0000");
//! assert_eq!(color_model::format(red, ColorFormat::Hsl), "0.0, 100.0%, 50.0%");
//! ```
//!
//! # Notations
//!
//! | Notation | Example | Conversion |
//! |----------|---------|------------|
//! | hex | `#63c522` | [`Color::from_hex`] / [`Color::to_hex`] |
//! | rgb | `99, 197, 34` | [`Color::from_rgb`] |
//! | vec3 | `0.3882, 0.7725, 0.1333` | [`Color::from_vec3`] / [`Color::to_vec3`] |
//! | hsl | `96.1, 70.6%, 45.3%` | [`Color::from_hsl`] / [`Color::to_hsl`] |
//!
//! All float-to-byte conversions round half away from zero and clamp to
//! `0..=255`. All text output uses `.` as the decimal separator regardless of
//! the host locale.

pub mod color;
pub mod error;
pub mod format;

pub use color::{Color, Hsl, Vec3};
pub use error::ParseColorError;
pub use format::{format, ColorFormat};
