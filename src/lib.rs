//! Palettize
//!
//! Remaps images onto a fixed color palette, or derives a palette from an
//! image's most or least frequent colors. The color engine lives in the
//! `palette-engine` crate; this crate adds file I/O and the CLI.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
