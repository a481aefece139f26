use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use palette_engine::PixelGrid;

use super::output_file::write_atomic;
use crate::error::AppError;

/// Open and decode a PNG or JPEG image, detecting the format from content.
pub fn load_image(path: &Path) -> Result<DynamicImage, AppError> {
    let open_err = |source| AppError::FileOpen {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?
        .decode()
        .map_err(|source| AppError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}

/// Encode `grid` as a JPEG with default encoder settings and write it
/// atomically to `path`.
pub fn save_image(path: &Path, grid: &PixelGrid) -> Result<(), AppError> {
    let rgb = grid.to_rgb8_image();
    write_atomic(path, |writer| {
        JpegEncoder::new(writer)
            .encode_image(&rgb)
            .map_err(|source| AppError::ImageEncode {
                path: path.to_path_buf(),
                source,
            })
    })?;

    tracing::info!(path = %path.display(), "Wrote image");
    Ok(())
}
