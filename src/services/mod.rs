pub mod image_io;
pub mod output_file;
pub mod palette_io;
pub mod pipeline;

pub use image_io::{load_image, save_image};
pub use output_file::write_atomic;
pub use palette_io::{load_palette, save_palette};
pub use pipeline::{run_convert, run_generate};
