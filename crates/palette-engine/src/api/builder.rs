//! Recolorer builder -- the primary ergonomic entry point for remapping.
//!
//! [`Recolorer`] pairs a validated [`Palette`] with worker pool
//! configuration and runs the transform engine with a cache scoped to each
//! call.

use super::error::EngineError;
use crate::grid::PixelGrid;
use crate::palette::Palette;
use crate::pool;
use crate::transform::{transform, ColorCache};

/// High-level nearest-color remapper.
///
/// - Constructor requires a [`Palette`], so an empty palette is rejected
///   before any pixel work begins
/// - [`recolor()`](Self::recolor) takes `&self`, so one recolorer can be
///   reused across images; each call gets a fresh [`ColorCache`]
///
/// # Example
///
/// ```
/// use palette_engine::{Color, Palette, PixelGrid, Recolorer};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let grid = PixelGrid::new(1, 1, vec![Color::from_rgb8(0x12, 0x34, 0x56)]).unwrap();
///
/// let out = Recolorer::new(palette).workers(2).recolor(&grid).unwrap();
/// assert_eq!(out.get(0, 0).to_hex(), "#000000");
/// ```
#[derive(Debug, Clone)]
pub struct Recolorer {
    palette: Palette,
    workers: usize,
}

impl Recolorer {
    /// Create a recolorer using one worker per available core.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            workers: pool::default_workers(),
        }
    }

    /// Set the worker pool size (0 is treated as 1).
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// The palette being mapped onto.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Remap `grid` with a cache that lives only for this call.
    pub fn recolor(&self, grid: &PixelGrid) -> Result<PixelGrid, EngineError> {
        let cache = ColorCache::new();
        self.recolor_with_cache(grid, &cache)
    }

    /// Remap `grid` sharing a caller-owned cache.
    ///
    /// The cache must only hold entries computed against this palette.
    pub fn recolor_with_cache(
        &self,
        grid: &PixelGrid,
        cache: &ColorCache,
    ) -> Result<PixelGrid, EngineError> {
        transform(grid, &self.palette, cache, self.workers)
    }
}
