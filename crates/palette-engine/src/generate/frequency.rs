//! Color occurrence counting.

use std::collections::HashMap;

use crate::color::Color;

/// Direction of frequency ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyOrder {
    /// Least-used colors first
    Ascending,
    /// Most-used colors first
    #[default]
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tally {
    count: u64,
    /// Row-major index of the first pixel with this color
    first_seen: usize,
}

/// Mapping from color to occurrence count.
///
/// Alongside each count the table keeps the row-major pixel index where the
/// color first appeared. That index is the secondary ranking key, so equal
/// counts always rank in first-seen order regardless of how the tally was
/// split across workers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColorFrequencyTable {
    entries: HashMap<Color, Tally>,
}

impl ColorFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `color` seen at row-major `index`.
    pub fn record(&mut self, color: Color, index: usize) {
        self.entries
            .entry(color)
            .and_modify(|t| {
                t.count += 1;
                t.first_seen = t.first_seen.min(index);
            })
            .or_insert(Tally {
                count: 1,
                first_seen: index,
            });
    }

    /// Fold another table into this one.
    pub fn merge(&mut self, other: ColorFrequencyTable) {
        for (color, tally) in other.entries {
            self.entries
                .entry(color)
                .and_modify(|t| {
                    t.count += tally.count;
                    t.first_seen = t.first_seen.min(tally.first_seen);
                })
                .or_insert(tally);
        }
    }

    /// Occurrence count of `color`.
    pub fn count(&self, color: Color) -> u64 {
        self.entries.get(&color).map_or(0, |t| t.count)
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(color, count)` pairs ranked by count in `order`, ties in
    /// first-seen order.
    pub fn ranked(&self, order: FrequencyOrder) -> Vec<(Color, u64)> {
        let mut ranked: Vec<_> = self.entries.iter().map(|(&c, &t)| (c, t)).collect();
        ranked.sort_unstable_by(|(_, a), (_, b)| {
            let by_count = match order {
                FrequencyOrder::Ascending => a.count.cmp(&b.count),
                FrequencyOrder::Descending => b.count.cmp(&a.count),
            };
            by_count.then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        ranked.into_iter().map(|(c, t)| (c, t.count)).collect()
    }
}
