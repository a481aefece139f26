//! Frequency palette generation
//!
//! Counts color occurrences across a pixel grid and keeps the top entries
//! in ascending or descending order of use.

mod frequency;
mod generator;

pub use frequency::{ColorFrequencyTable, FrequencyOrder};
pub use generator::{generate, PaletteGenerator, DEFAULT_PALETTE_SIZE};
