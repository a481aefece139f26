use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use palette_engine::Color;

use super::output_file::write_atomic;
use crate::error::AppError;
use crate::models::PaletteFile;

/// Read a JSON palette file into an ordered color list.
///
/// The list may be empty; callers that need a matching palette validate
/// that separately.
pub fn load_palette(path: &Path) -> Result<Vec<Color>, AppError> {
    let file = File::open(path).map_err(|source| AppError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: PaletteFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| AppError::PaletteJson {
            path: path.to_path_buf(),
            source,
        })?;

    let colors = parsed.to_colors().map_err(|source| AppError::PaletteEntry {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), colors = colors.len(), "Loaded palette");
    Ok(colors)
}

/// Write `colors` as a JSON palette file, atomically.
pub fn save_palette(path: &Path, colors: &[Color]) -> Result<(), AppError> {
    let file = PaletteFile::from_colors(colors);
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, &file).map_err(|source| {
            AppError::PaletteEncode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.write_all(b"\n").map_err(|source| AppError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    })?;

    tracing::info!(path = %path.display(), colors = colors.len(), "Wrote palette");
    Ok(())
}
