//! Color value type and distance metric
//!
//! # Example
//!
//! ```
//! use palette_engine::{distance, Color};
//!
//! let a: Color = "#102030".parse().unwrap();
//! let b = Color::from_rgb8(0x10, 0x20, 0x30);
//!
//! assert_eq!(distance(a, b), 0.0);
//! ```

mod metric;
mod rgb;

pub use metric::{distance, distance_squared};
pub use rgb::Color;
