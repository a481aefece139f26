use std::path::Path;

use palette_engine::{load_grid, FrequencyOrder, Palette, PaletteGenerator, Recolorer};

use super::image_io::{load_image, save_image};
use super::palette_io::{load_palette, save_palette};
use crate::error::AppError;
use crate::models::RunConfig;

/// Remap `image_path` onto the palette in `palette_path` and write the
/// result to `output_path` as JPEG.
///
/// The palette is loaded and validated before the image is touched, so a
/// malformed or empty palette aborts without any pixel work.
pub fn run_convert(
    palette_path: &Path,
    image_path: &Path,
    output_path: &Path,
    config: &RunConfig,
) -> Result<(), AppError> {
    let colors = load_palette(palette_path)?;
    let palette = Palette::new(colors).map_err(|source| AppError::InvalidPalette {
        path: palette_path.to_path_buf(),
        source,
    })?;

    let image = load_image(image_path)?;
    let grid = load_grid(&image, config.workers);
    drop(image);

    tracing::debug!(
        workers = config.workers,
        palette = palette.len(),
        "Converting image"
    );
    let converted = Recolorer::new(palette)
        .workers(config.workers)
        .recolor(&grid)
        .map_err(|e| AppError::from_engine(palette_path, image_path, e))?;

    save_image(output_path, &converted)
}

/// Derive a frequency palette from `image_path` and write it to
/// `palette_path`.
pub fn run_generate(
    palette_path: &Path,
    image_path: &Path,
    order: FrequencyOrder,
    config: &RunConfig,
) -> Result<(), AppError> {
    let image = load_image(image_path)?;
    let grid = load_grid(&image, config.workers);
    drop(image);

    let colors = PaletteGenerator::new()
        .order(order)
        .size(config.palette_size)
        .workers(config.workers)
        .generate(&grid)
        .map_err(|e| AppError::from_engine(palette_path, image_path, e))?;

    tracing::info!(colors = colors.len(), order = ?order, "Generated palette");
    save_palette(palette_path, &colors)
}
