use std::borrow::Borrow;

use crate::instant::Instant;
use crate::span::TimeSpanRange;

/// Iterator returned by [`TimeSpanRange::intersect_all`].
#[derive(Debug, Clone)]
pub struct IntersectAll<T: Instant, I> {
    window: TimeSpanRange<T>,
    ranges: I,
}

impl<T: Instant, I> IntersectAll<T, I> {
    pub(crate) fn new(window: TimeSpanRange<T>, ranges: I) -> Self {
        Self { window, ranges }
    }
}

impl<T, I> Iterator for IntersectAll<T, I>
where
    T: Instant,
    I: Iterator,
    I::Item: Borrow<TimeSpanRange<T>>,
{
    type Item = TimeSpanRange<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let window = self.window;
        self.ranges
            .by_ref()
            .map(|range| window.intersect(range.borrow()))
            .find(|overlap| !overlap.is_never())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.ranges.size_hint().1)
    }
}

/// Computes the intersection of two canonical range sets.
///
/// # Arguments
///
/// * `a` - First set of sorted ranges with gaps between them
/// * `b` - Second set of sorted ranges with gaps between them
///
/// # Returns
///
/// The overlapping pieces, sorted and canonical. Pieces that collapse to a
/// single instant are dropped, matching [`TimeSpanRange::intersect`].
pub fn compute_intersection<T: Instant>(
    a: &[TimeSpanRange<T>],
    b: &[TimeSpanRange<T>],
) -> Vec<TimeSpanRange<T>> {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));

    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        let ra = &a[i];
        let rb = &b[j];

        let overlap = ra.intersect(rb);
        if !overlap.is_never() {
            result.push(overlap);
        }

        match ra.end().cmp(&rb.end()) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    result
}
