//! Extraction of a [`PixelGrid`] from a decoded image.

use image::DynamicImage;

use super::pixel_grid::PixelGrid;
use crate::color::Color;
use crate::pool;

/// Extract every pixel of `image` into a row-major grid.
///
/// Rows are filled concurrently on up to `workers` threads and joined
/// before returning. Images of any bit depth are read at 16 bits per
/// channel. A zero-width or zero-height image yields an empty grid.
pub fn load_grid(image: &DynamicImage, workers: usize) -> PixelGrid {
    let source = image.to_rgba16();
    let (width, height) = (source.width() as usize, source.height() as usize);
    if width == 0 || height == 0 {
        return PixelGrid::from_parts(width, height, Vec::new());
    }

    let mut pixels = vec![Color::default(); width * height];
    pool::for_each_row_mut(&mut pixels, width, workers, |y, row| {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = Color::from(*source.get_pixel(x as u32, y as u32));
        }
    });

    tracing::debug!(width, height, "loaded pixel grid");
    PixelGrid::from_parts(width, height, pixels)
}
