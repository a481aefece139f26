//! Frequency palette extraction.

use super::frequency::{ColorFrequencyTable, FrequencyOrder};
use crate::api::EngineError;
use crate::color::Color;
use crate::grid::PixelGrid;
use crate::pool;

/// Default number of entries in a generated palette.
pub const DEFAULT_PALETTE_SIZE: usize = 21;

/// Derives a palette from an image's most or least frequent colors.
///
/// Colors are tallied on their opaque RGB value, since the rendered palette
/// carries no alpha. The tally is split into row bands counted on separate
/// workers and merged; the ranking is identical however the work is split.
///
/// # Example
///
/// ```
/// use palette_engine::{Color, FrequencyOrder, PaletteGenerator, PixelGrid};
///
/// let red = Color::from_rgb8(255, 0, 0);
/// let green = Color::from_rgb8(0, 255, 0);
/// let grid = PixelGrid::new(2, 2, vec![red, red, red, green]).unwrap();
///
/// let colors = PaletteGenerator::new()
///     .order(FrequencyOrder::Ascending)
///     .generate(&grid)
///     .unwrap();
///
/// assert_eq!(colors, vec![green, red]);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    order: FrequencyOrder,
    size: usize,
    workers: usize,
}

impl PaletteGenerator {
    /// Most-used first, 21 entries, one worker per available core.
    pub fn new() -> Self {
        Self {
            order: FrequencyOrder::Descending,
            size: DEFAULT_PALETTE_SIZE,
            workers: pool::default_workers(),
        }
    }

    /// Set the ranking direction.
    #[inline]
    pub fn order(mut self, order: FrequencyOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the maximum number of colors returned.
    #[inline]
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the worker pool size (0 is treated as 1).
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Count every pixel of `grid` into a frequency table.
    ///
    /// Pixels are counted by the 8-bit opaque color they are written out
    /// as, so 16-bit shades sharing a high byte count as one color.
    pub fn tally(&self, grid: &PixelGrid) -> ColorFrequencyTable {
        let width = grid.width();
        let bands = pool::map_row_bands(grid.height(), self.workers, |rows| {
            let mut table = ColorFrequencyTable::new();
            for y in rows {
                for (x, &color) in grid.row(y).iter().enumerate() {
                    table.record(color.quantized(), y * width + x);
                }
            }
            table
        });

        let mut total = ColorFrequencyTable::new();
        for band in bands {
            total.merge(band);
        }
        total
    }

    /// The first `min(size, distinct)` colors of `grid` by frequency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyImage`] on a grid with no pixels.
    pub fn generate(&self, grid: &PixelGrid) -> Result<Vec<Color>, EngineError> {
        if grid.is_empty() {
            return Err(EngineError::EmptyImage {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let table = self.tally(grid);
        let colors: Vec<Color> = table
            .ranked(self.order)
            .into_iter()
            .take(self.size)
            .map(|(color, _)| color)
            .collect();

        tracing::debug!(
            distinct = table.len(),
            kept = colors.len(),
            order = ?self.order,
            "ranked colors by frequency"
        );
        Ok(colors)
    }
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency palette of `grid` with default size and workers.
pub fn generate(grid: &PixelGrid, order: FrequencyOrder) -> Result<Vec<Color>, EngineError> {
    PaletteGenerator::new().order(order).generate(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn distinct_grid(n: usize) -> PixelGrid {
        // color i appears i + 1 times
        let mut pixels = Vec::new();
        for i in 0..n {
            for _ in 0..=i {
                pixels.push(Color::from_rgb8(i as u8, 0, 0));
            }
        }
        let len = pixels.len();
        PixelGrid::new(len, 1, pixels).unwrap()
    }

    #[test]
    fn test_generate_caps_at_default_size() {
        let grid = distinct_grid(30);
        let colors = generate(&grid, FrequencyOrder::Descending).unwrap();
        assert_eq!(colors.len(), DEFAULT_PALETTE_SIZE);
        assert_eq!(colors[0], Color::from_rgb8(29, 0, 0));
    }

    #[test]
    fn test_generate_returns_all_when_fewer_than_size() {
        let grid = distinct_grid(5);
        let colors = generate(&grid, FrequencyOrder::Ascending).unwrap();
        let expected: Vec<_> = (0..5u8).map(|i| Color::from_rgb8(i, 0, 0)).collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_generate_custom_size() {
        let grid = distinct_grid(10);
        let colors = PaletteGenerator::new().size(3).generate(&grid).unwrap();
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_generate_ignores_alpha() {
        let c = Color::from_rgb8(1, 2, 3);
        let grid = PixelGrid::new(2, 1, vec![c.with_alpha(0), c]).unwrap();
        let colors = generate(&grid, FrequencyOrder::Descending).unwrap();
        assert_eq!(colors, vec![c]);
    }

    #[test]
    fn test_generate_merges_16bit_shades_of_one_color() {
        let grid = PixelGrid::new(
            4,
            1,
            vec![
                Color::new(0x1200, 0, 0, 0xffff),
                Color::new(0xff00, 0, 0, 0xffff),
                Color::new(0x12ff, 0, 0, 0xffff),
                Color::new(0x1280, 0, 0, 0xffff),
            ],
        )
        .unwrap();

        let generator = PaletteGenerator::new();
        assert_eq!(generator.tally(&grid).count(Color::from_rgb8(0x12, 0, 0)), 3);

        let hex: Vec<_> = generator
            .generate(&grid)
            .unwrap()
            .iter()
            .map(|c| c.to_hex())
            .collect();
        assert_eq!(hex, vec!["#120000", "#ff0000"]);
    }

    #[test]
    fn test_tally_independent_of_worker_count() {
        let grid = PixelGrid::from_fn(13, 29, |x, y| {
            Color::from_rgb8(((x * y) % 5) as u8, (y % 3) as u8, 0)
        });
        let serial = PaletteGenerator::new().workers(1);
        let parallel = PaletteGenerator::new().workers(7);

        assert_eq!(serial.tally(&grid), parallel.tally(&grid));
        assert_eq!(
            serial.size(usize::MAX).generate(&grid).unwrap(),
            parallel.size(usize::MAX).generate(&grid).unwrap()
        );
    }

    #[test]
    fn test_generate_empty_grid() {
        let grid = PixelGrid::new(4, 0, Vec::new()).unwrap();
        assert!(matches!(
            generate(&grid, FrequencyOrder::Ascending),
            Err(EngineError::EmptyImage { width: 4, height: 0 })
        ));
    }
}
