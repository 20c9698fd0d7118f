use crate::instant::Instant;
use crate::span::TimeSpanRange;

/// Iterator returned by [`TimeSpanRange::union`].
///
/// The input is sorted by start when the iterator is built; merging happens
/// as results are pulled. Each call to `next` extends the current run over
/// every following range that overlaps or touches it, and stops at the first
/// range separated by a genuine gap.
#[derive(Debug, Clone)]
pub struct Union<T: Instant> {
    sorted: std::vec::IntoIter<TimeSpanRange<T>>,
    current: Option<TimeSpanRange<T>>,
}

impl<T: Instant> Union<T> {
    pub(crate) fn new(mut ranges: Vec<TimeSpanRange<T>>) -> Self {
        ranges.sort_unstable_by_key(|r| r.start());
        tracing::trace!(count = ranges.len(), "merging ranges");
        let mut sorted = ranges.into_iter();
        let current = sorted.next();
        Self { sorted, current }
    }
}

impl<T: Instant> Iterator for Union<T> {
    type Item = TimeSpanRange<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = self.current.take()?;
        for range in self.sorted.by_ref() {
            if range.start() > current.end() {
                self.current = Some(range);
                return Some(current);
            }
            if range.end() > current.end() {
                // Sorted by start, so `current.start() <= range.start() <= current.end()`.
                current = TimeSpanRange::from_ordered_unchecked(current.start(), range.end());
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            None => (0, Some(0)),
            Some(_) => (1, Some(self.sorted.len() + 1)),
        }
    }
}
