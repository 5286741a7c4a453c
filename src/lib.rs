//! colorq - color codes in, color codes out
//!
//! Detects hex, rgb, vec3 and hsl color codes in launcher queries, converts
//! them into every other notation and renders a cached preview swatch.
//! This library exposes modules for integration testing and for hosts that
//! embed the query engine directly.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use color_model::{Color, ColorFormat};
