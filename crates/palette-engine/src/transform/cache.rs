//! Memoizing cache from source color to nearest palette color.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::color::Color;

/// Shared read-write cache of nearest-color results.
///
/// One cache is owned by a single transform invocation and borrowed by all
/// of its workers. Lookups take a read lock; population takes a write lock
/// and inserts only if the key is still absent.
///
/// Two workers may miss on the same key, compute the match independently,
/// and race to insert. The first writer wins and the second insert is a
/// no-op. Both computed the same value for the same key against the same
/// palette, so the race never changes any output pixel.
#[derive(Debug, Default)]
pub struct ColorCache {
    entries: RwLock<HashMap<Color, Color>>,
}

impl ColorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache pre-populated with `(source, nearest)` pairs.
    ///
    /// Entries must be correct for the palette the cache is used with.
    pub fn seeded(entries: impl IntoIterator<Item = (Color, Color)>) -> Self {
        Self {
            entries: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Cached nearest color for `source`, if any.
    #[inline]
    pub fn get(&self, source: Color) -> Option<Color> {
        self.entries.read().get(&source).copied()
    }

    /// Insert `nearest` for `source` unless an entry already exists.
    ///
    /// Returns `true` if this call inserted the entry.
    pub fn insert_if_absent(&self, source: Color, nearest: Color) -> bool {
        let mut entries = self.entries.write();
        if entries.contains_key(&source) {
            return false;
        }
        entries.insert(source, nearest);
        true
    }

    /// Number of distinct source colors cached.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True if nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
