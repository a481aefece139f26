//! Pixel transform engine
//!
//! Remaps an image onto a palette with a bounded row worker pool and a
//! shared memoizing [`ColorCache`].

mod cache;
mod engine;

pub use cache::ColorCache;
pub use engine::transform;
