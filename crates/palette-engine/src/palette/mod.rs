//! Palette types and nearest-color matching
//!
//! This module provides the validated [`Palette`] type, the free
//! [`nearest`] function, and error types for parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{nearest, parse_colors, Palette};
