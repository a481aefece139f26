//! Palette struct with nearest-color matching.
//!
//! A [`Palette`] is an ordered, non-empty list of candidate colors. Order is
//! irrelevant to which colors are candidates but fixes the tie-break: when
//! several entries are equally close, the one appearing first wins.

use super::error::PaletteError;
use crate::color::{distance_squared, Color};

/// A validated, non-empty, ordered color palette.
///
/// Duplicate entries are permitted; matching always resolves to the first.
///
/// # Example
///
/// ```
/// use palette_engine::{Color, Palette};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// let dark = Color::from_rgb8(0x12, 0x34, 0x56);
/// assert_eq!(palette.nearest(dark), Color::from_rgb8(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: impl Into<Vec<Color>>) -> Result<Self, PaletteError> {
        let colors = colors.into();
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from `#rrggbb` strings.
    ///
    /// Fails on the first malformed entry, naming it and its index.
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self, PaletteError> {
        Self::new(parse_colors(entries)?)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Companion to [`len`](Self::len) for clippy's `len_without_is_empty`.
    /// Construction rejects empty palettes, so this returns `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Color {
        self.colors[idx]
    }

    /// All palette colors in order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Find the palette entry closest to `color`.
    ///
    /// Returns `(index, squared_distance)`. Linear scan with a strict `<`
    /// comparison, so the earliest entry achieving the minimum is kept.
    #[inline]
    pub fn find_nearest(&self, color: Color) -> (usize, u64) {
        scan(color, &self.colors)
    }

    /// The palette color closest to `color`.
    #[inline]
    pub fn nearest(&self, color: Color) -> Color {
        self.colors[self.find_nearest(color).0]
    }
}

/// Nearest color in an arbitrary color list.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] if `palette` is empty.
pub fn nearest(color: Color, palette: &[Color]) -> Result<Color, PaletteError> {
    if palette.is_empty() {
        return Err(PaletteError::EmptyPalette);
    }
    Ok(palette[scan(color, palette).0])
}

/// Parse `#rrggbb` entries in order, failing on the first malformed one
/// with its index. An empty list parses to an empty `Vec`.
pub fn parse_colors<S: AsRef<str>>(entries: &[S]) -> Result<Vec<Color>, PaletteError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.as_ref();
            Color::from_hex(entry).map_err(|source| PaletteError::ParseColor {
                index,
                entry: entry.to_string(),
                source,
            })
        })
        .collect()
}

// Strict `<` keeps the earliest entry on ties. Returns `(0, u64::MAX)` for
// an empty slice.
#[inline]
fn scan(color: Color, colors: &[Color]) -> (usize, u64) {
    let mut best_idx = 0;
    let mut best_dist = u64::MAX;

    for (i, &candidate) in colors.iter().enumerate() {
        let dist = distance_squared(color, candidate);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
            if dist == 0 {
                break;
            }
        }
    }

    (best_idx, best_dist)
}
