//! Concurrent nearest-color remapping of a pixel grid.

use super::cache::ColorCache;
use crate::api::EngineError;
use crate::color::Color;
use crate::grid::PixelGrid;
use crate::palette::Palette;
use crate::pool;

/// Remap every pixel of `grid` to its nearest `palette` entry.
///
/// The output has the same dimensions as the input. Each output pixel is
/// the nearest palette color with the source pixel's alpha.
///
/// Rows are distributed over a bounded pool of `workers` threads that all
/// share `cache`. Per pixel, a worker:
///
/// 1. looks the source color up under a read lock;
/// 2. on a hit, writes the cached color;
/// 3. on a miss, computes the match with no lock held, inserts it if still
///    absent under a write lock, and writes its own result either way.
///
/// Every output cell belongs to exactly one row and therefore exactly one
/// worker, so each is written exactly once.
///
/// # Errors
///
/// Returns [`EngineError::EmptyImage`] if the grid has no rows or
/// zero-width rows.
pub fn transform(
    grid: &PixelGrid,
    palette: &Palette,
    cache: &ColorCache,
    workers: usize,
) -> Result<PixelGrid, EngineError> {
    if grid.is_empty() {
        return Err(EngineError::EmptyImage {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let width = grid.width();
    let mut output = vec![Color::default(); width * grid.height()];

    pool::for_each_row_mut(&mut output, width, workers, |y, out_row| {
        for (dst, &src) in out_row.iter_mut().zip(grid.row(y)) {
            let matched = match cache.get(src) {
                Some(hit) => hit,
                None => {
                    let computed = palette.nearest(src);
                    cache.insert_if_absent(src, computed);
                    computed
                }
            };
            *dst = matched.with_alpha(src.a);
        }
    });

    tracing::debug!(
        width,
        height = grid.height(),
        distinct = cache.len(),
        "transformed grid"
    );
    Ok(PixelGrid::from_parts(width, grid.height(), output))
}
