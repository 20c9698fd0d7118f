//! Debug-only checks for range collections.

use crate::instant::Instant;
use crate::span::TimeSpanRange;

/// Returns true if `ranges` is canonical: sorted by start with a non-zero gap
/// between consecutive ranges (touching ranges would have been merged).
pub fn is_canonical<T: Instant>(ranges: &[TimeSpanRange<T>]) -> bool {
    ranges.windows(2).all(|w| w[1].start() > w[0].end())
}
