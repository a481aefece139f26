//! High-level API: the [`Recolorer`] builder and the unified [`EngineError`].

mod builder;
mod error;

pub use builder::Recolorer;
pub use error::EngineError;
