//! Pixel grid storage and loading
//!
//! [`PixelGrid`] is the in-memory, format-independent form of an image
//! consumed by both the transform engine and the palette generator.

mod loader;
mod pixel_grid;

pub use loader::load_grid;
pub use pixel_grid::{GridShapeError, PixelGrid};
