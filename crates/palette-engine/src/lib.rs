//! palette-engine: nearest-color remapping and frequency palettes
//!
//! This library remaps every pixel of an image onto the nearest color of a
//! fixed palette, and inversely derives a palette from an image's most or
//! least frequent colors. It performs no file I/O; callers decode images
//! and hand over a [`PixelGrid`].
//!
//! # Quick Start
//!
//! ```
//! use palette_engine::{Color, Palette, PixelGrid, Recolorer};
//!
//! let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
//! let grid = PixelGrid::from_fn(2, 2, |x, _| {
//!     if x == 0 { Color::from_rgb8(30, 30, 30) } else { Color::from_rgb8(220, 220, 220) }
//! });
//!
//! let out = Recolorer::new(palette).recolor(&grid).unwrap();
//! assert_eq!(out.get(0, 1).to_hex(), "#000000");
//! assert_eq!(out.get(1, 1).to_hex(), "#ffffff");
//! ```
//!
//! # Frequency Palettes
//!
//! ```
//! use palette_engine::{FrequencyOrder, PaletteGenerator, PixelGrid, Color};
//!
//! let grid = PixelGrid::from_fn(3, 1, |x, _| Color::from_rgb8(0, 0, (x / 2) as u8));
//! let colors = PaletteGenerator::new()
//!     .order(FrequencyOrder::Descending)
//!     .generate(&grid)
//!     .unwrap();
//!
//! assert_eq!(colors[0].to_hex(), "#000000");
//! ```
//!
//! # Distance
//!
//! Matching uses plain Euclidean distance over the 16-bit red, green and
//! blue channels. Alpha never takes part in matching; a remapped pixel keeps
//! the alpha of its source.
//!
//! ```text
//! d = sqrt(|r1 - r2|^2 + |g1 - g2|^2 + |b1 - b2|^2)
//! ```
//!
//! The matcher compares exact integer squared distances, so equidistant
//! palette entries are detected exactly and the first one wins.
//!
//! # Concurrency
//!
//! Grid loading, remapping and tallying all split an image by rows across a
//! bounded pool of scoped threads (default: available parallelism). The
//! remapper shares one [`ColorCache`] between its workers, so the nearest
//! match is computed roughly once per distinct source color rather than
//! once per pixel.

pub mod api;
pub mod color;
pub mod generate;
pub mod grid;
pub mod palette;
mod pool;
pub mod transform;


pub use api::{EngineError, Recolorer};
pub use color::{distance, distance_squared, Color};
pub use generate::{
    generate, ColorFrequencyTable, FrequencyOrder, PaletteGenerator, DEFAULT_PALETTE_SIZE,
};
pub use grid::{load_grid, GridShapeError, PixelGrid};
pub use palette::{nearest, parse_colors, Palette, PaletteError, ParseColorError};
pub use pool::default_workers;
pub use transform::{transform, ColorCache};
