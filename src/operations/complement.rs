use crate::instant::Instant;
use crate::span::TimeSpanRange;

use super::union::Union;

/// Returns the complement of a canonical range set within the whole timeline.
///
/// Gaps share their bounds with the neighbouring ranges, the same way
/// [`TimeSpanRange::inverse`] does for a single range. Gaps left touching by
/// a zero-length range are merged, so the result is canonical too. An empty
/// set yields [`TimeSpanRange::ANYTIME`]; a set covering everything yields nothing.
pub fn compute_complement<T: Instant>(canonical: &[TimeSpanRange<T>]) -> Vec<TimeSpanRange<T>> {
    debug_assert!(super::assertions::is_canonical(canonical));

    let (first, last) = match (canonical.first(), canonical.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return vec![TimeSpanRange::ANYTIME],
    };

    let mut result = Vec::with_capacity(canonical.len() + 1);
    if first.start() > T::MIN {
        result.push(TimeSpanRange::from_ordered_unchecked(T::MIN, first.start()));
    }
    for w in canonical.windows(2) {
        result.push(TimeSpanRange::from_ordered_unchecked(w[0].end(), w[1].start()));
    }
    if last.end() < T::MAX {
        result.push(TimeSpanRange::from_ordered_unchecked(last.end(), T::MAX));
    }

    Union::new(result).collect()
}
