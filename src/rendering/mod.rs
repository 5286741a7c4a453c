pub mod swatch;

pub use swatch::{render_swatch_png, DEFAULT_SWATCH_SIZE, MAX_SWATCH_SIZE};
