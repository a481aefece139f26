//! Image and palette files written into a scratch directory.

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb, RgbImage};
use palettize::models::RunConfig;
use tempfile::TempDir;

/// A scratch directory holding the inputs for one test.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a PNG whose pixels come from `rows` of `[r, g, b]` values.
    pub fn png(&self, name: &str, rows: &[&[[u8; 3]]]) -> PathBuf {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let img: RgbImage =
            ImageBuffer::from_fn(width, height, |x, y| Rgb(rows[y as usize][x as usize]));
        let path = self.path(name);
        img.save_with_format(&path, image::ImageFormat::Png)
            .expect("Failed to write PNG fixture");
        path
    }

    /// Write a 16-bit-per-channel PNG from `rows` of `[r, g, b]` values.
    pub fn png16(&self, name: &str, rows: &[&[[u16; 3]]]) -> PathBuf {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_fn(width, height, |x, y| Rgb(rows[y as usize][x as usize]));
        let path = self.path(name);
        img.save_with_format(&path, image::ImageFormat::Png)
            .expect("Failed to write PNG fixture");
        path
    }

    /// Write an arbitrary text file, typically a palette document.
    pub fn text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Names of all files currently in the workspace.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("Failed to list temp dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Two workers keep the parallel path exercised on single-core runners.
pub fn test_config() -> RunConfig {
    RunConfig::new(Some(2), None)
}

/// Decode an image file into RGB8 for inspection.
pub fn read_rgb(path: &Path) -> RgbImage {
    image::open(path).expect("Failed to decode output").to_rgb8()
}

/// Channel-wise comparison with a small allowance for JPEG rounding.
pub fn assert_near(actual: [u8; 3], expected: [u8; 3]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            a.abs_diff(*e) <= 4,
            "pixel {actual:?} is not close to {expected:?}"
        );
    }
}
