//! Unified error type for the palette-engine public API.
//!
//! [`EngineError`] wraps the failures of the remapping and generation
//! operations into a single enum for convenient `?` propagation.

use crate::palette::PaletteError;
use thiserror::Error;

/// Unified error type for the palette-engine public API.
///
/// # Example
///
/// ```
/// use palette_engine::{EngineError, Palette};
///
/// fn build() -> Result<Palette, EngineError> {
///     let palette = Palette::from_hex(&["#000000", "#ffffff"])?;
///     Ok(palette)
/// }
/// # build().unwrap();
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Palette was empty or malformed
    #[error("invalid palette: {0}")]
    InvalidPalette(#[from] PaletteError),
    /// Image has no rows or zero-width rows
    #[error("image is empty ({width}x{height})")]
    EmptyImage {
        /// Width in pixels
        width: usize,
        /// Height in pixels
        height: usize,
    },
}
