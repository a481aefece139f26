//! Euclidean RGB distance.
//!
//! Channel differences are unsigned absolute differences of the 16-bit
//! channels. Alpha never participates. The metric is only ever used to find
//! a minimum, so no normalization by channel range is applied.

use super::rgb::Color;

/// Squared Euclidean distance over red, green and blue.
///
/// Exact integer arithmetic: the largest possible value is
/// `3 * 0xffff^2`, well within `u64`. Ordering by this value is identical
/// to ordering by [`distance`], and equal distances compare equal exactly.
#[inline]
pub fn distance_squared(a: Color, b: Color) -> u64 {
    let dr = u64::from(a.r.abs_diff(b.r));
    let dg = u64::from(a.g.abs_diff(b.g));
    let db = u64::from(a.b.abs_diff(b.b));
    dr * dr + dg * dg + db * db
}

/// Euclidean distance `sqrt(dr^2 + dg^2 + db^2)`.
///
/// # Example
/// ```
/// use palette_engine::{distance, Color};
/// let black = Color::from_rgb8(0, 0, 0);
/// let red = Color::from_rgb8(255, 0, 0);
/// assert_eq!(distance(black, red), 65535.0);
/// ```
#[inline]
pub fn distance(a: Color, b: Color) -> f64 {
    (distance_squared(a, b) as f64).sqrt()
}
