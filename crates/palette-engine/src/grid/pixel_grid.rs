//! Row-major pixel matrix decoupled from any file format.

use image::RgbImage;

use crate::color::Color;

/// Error returned when pixel data does not match the stated dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("pixel buffer holds {actual} pixels, expected {width}x{height}")]
pub struct GridShapeError {
    /// Stated width
    pub width: usize,
    /// Stated height
    pub height: usize,
    /// Number of pixels supplied
    pub actual: usize,
}

/// A row-major two-dimensional array of [`Color`].
///
/// Dimensions are fixed at construction and the grid exposes no mutation,
/// so every row has exactly `width` pixels for the grid's lifetime.
///
/// # Example
///
/// ```
/// use palette_engine::{Color, PixelGrid};
///
/// let red = Color::from_rgb8(255, 0, 0);
/// let grid = PixelGrid::new(2, 1, vec![red, red]).unwrap();
///
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 1);
/// assert_eq!(grid.get(1, 0), red);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Create a grid from row-major pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, GridShapeError> {
        if pixels.len() != width * height {
            return Err(GridShapeError {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Assemble a grid from a buffer already known to be `width * height`.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the grid has no rows or zero-width rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Row `y` as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[Color] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterator over rows, top to bottom. Yields nothing for an empty grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks() rejects a zero chunk size
        self.pixels.chunks(self.width.max(1))
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Encode as an 8-bit RGB image, dropping alpha.
    pub fn to_rgb8_image(&self) -> RgbImage {
        let mut out = RgbImage::new(self.width as u32, self.height as u32);
        for (dst, &src) in out.pixels_mut().zip(&self.pixels) {
            *dst = src.into();
        }
        out
    }
}
