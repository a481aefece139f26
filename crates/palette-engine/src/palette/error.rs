//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use thiserror::Error;

/// Error type for parsing `#rrggbb` hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string does not start with `#`
    #[error("hex color must start with '#'")]
    MissingHash,
    /// Wrong number of digits after the `#`
    #[error("invalid hex color length {0} (expected 6 digits)")]
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// A palette entry failed to parse
    #[error("invalid color {entry:?} at index {index}: {source}")]
    ParseColor {
        /// Index of the offending entry
        index: usize,
        /// The entry as written
        entry: String,
        /// What was wrong with it
        source: ParseColorError,
    },
}
