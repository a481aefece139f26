use std::path::{Path, PathBuf};

use palette_engine::{EngineError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Could not parse palette file {path}: {source}")]
    PaletteJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid palette entry in {path}: {source}")]
    PaletteEntry {
        path: PathBuf,
        source: PaletteError,
    },

    #[error("Invalid palette {path}: {source}")]
    InvalidPalette {
        path: PathBuf,
        source: PaletteError,
    },

    #[error("Image {path} is empty ({width}x{height})")]
    EmptyImage {
        path: PathBuf,
        width: usize,
        height: usize,
    },

    #[error("Failed to encode image {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode palette {path}: {source}")]
    PaletteEncode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Cannot write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AppError {
    /// Attach the path of the file an engine failure is about: the palette
    /// file for palette errors, the image file otherwise.
    pub fn from_engine(palette: &Path, image: &Path, err: EngineError) -> Self {
        match err {
            EngineError::InvalidPalette(source) => AppError::InvalidPalette {
                path: palette.to_path_buf(),
                source,
            },
            EngineError::EmptyImage { width, height } => AppError::EmptyImage {
                path: image.to_path_buf(),
                width,
                height,
            },
        }
    }

    /// True for the malformed-palette family (bad JSON or bad entry).
    pub fn is_palette_parse(&self) -> bool {
        matches!(
            self,
            AppError::PaletteJson { .. } | AppError::PaletteEntry { .. }
        )
    }
}
