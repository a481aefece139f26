use palette_engine::{default_workers, DEFAULT_PALETTE_SIZE};

/// Settings shared by the convert and generate commands.
///
/// Populated from command-line flags, which fall back to environment
/// variables and then to these defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Worker pool size for row-parallel stages
    pub workers: usize,

    /// Maximum number of colors in a generated palette
    pub palette_size: usize,
}

impl RunConfig {
    pub fn new(workers: Option<usize>, palette_size: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            workers: workers.filter(|&w| w > 0).unwrap_or(defaults.workers),
            palette_size: palette_size.unwrap_or(defaults.palette_size),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}
