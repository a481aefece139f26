pub mod config;
pub mod palette_file;

pub use config::RunConfig;
pub use palette_file::PaletteFile;
