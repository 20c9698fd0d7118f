//! A canonical container for disjoint, sorted time ranges.
//!
//! [`RangeSet`] wraps a `Vec<TimeSpanRange<T>>` and keeps it in the form
//! produced by [`TimeSpanRange::union`]: sorted by start, with a non-zero gap
//! between consecutive ranges. Overlapping and touching ranges are merged on
//! the way in.
//!
//! Read access is transparent via `Deref<Target = [TimeSpanRange<T>]>`.
//! Mutation goes through methods that re-establish the invariant.

use std::fmt::{self, Display};
use std::ops::{Deref, Index};

use qtty::{Quantity, Second, Unit};

use crate::instant::Instant;
use crate::operations::{compute_complement, compute_intersection};
use crate::span::TimeSpanRange;
use crate::units::{self, SameDim};

/// Sorted, gapped set of closed ranges, e.g. the busy or free periods of an itinerary.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use spanalg::{RangeSet, TimeSpanRange};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let r = |a, b| TimeSpanRange::new(day(a), day(b)).unwrap();
///
/// let busy = RangeSet::from(vec![r(10, 15), r(1, 5), r(4, 6)]);
/// assert_eq!(busy, vec![r(1, 6), r(10, 15)]);
/// assert!(busy.contains(day(12)));
/// assert!(!busy.contains(day(8)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSet<T: Instant>(Vec<TimeSpanRange<T>>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> RangeSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps a `Vec` that is **already canonical** without re-merging.
    ///
    /// In debug builds this asserts the invariant.
    pub(crate) fn from_sorted_unchecked(vec: Vec<TimeSpanRange<T>>) -> Self {
        debug_assert!(
            crate::operations::assertions::is_canonical(&vec),
            "RangeSet::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    fn normalize(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        let ranges = std::mem::take(&mut self.0);
        self.0 = TimeSpanRange::union(ranges).collect();
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation methods
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> RangeSet<T> {
    /// Inserts a range, merging it with any neighbour it overlaps or touches.
    pub fn push(&mut self, range: TimeSpanRange<T>) {
        // Fast path: strictly after the last range.
        if self.0.last().map_or(true, |last| range.start() > last.end()) {
            self.0.push(range);
            return;
        }
        self.0.push(range);
        self.normalize();
    }

    /// Appends all ranges from a slice, then re-normalizes.
    pub fn extend_from_slice(&mut self, ranges: &[TimeSpanRange<T>]) {
        if ranges.is_empty() {
            return;
        }
        self.0.extend_from_slice(ranges);
        self.normalize();
    }

    /// Retains only the ranges for which the predicate returns `true`.
    ///
    /// Removal cannot break ordering or close a gap, so no re-normalization is needed.
    pub fn retain<F: FnMut(&TimeSpanRange<T>) -> bool>(&mut self, f: F) {
        self.0.retain(f);
    }

    pub fn into_inner(self) -> Vec<TimeSpanRange<T>> {
        self.0
    }

    pub fn as_slice(&self) -> &[TimeSpanRange<T>] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries and set operations
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> RangeSet<T> {
    /// Returns true if any range in the set contains `instant`.
    pub fn contains(&self, instant: T) -> bool {
        // First range starting after `instant`; only its predecessor can contain it.
        let idx = self.0.partition_point(|r| r.start() <= instant);
        idx > 0 && self.0[idx - 1].contains(instant)
    }

    /// Returns true if any range in the set intersects `range` (touching counts).
    pub fn intersects(&self, range: &TimeSpanRange<T>) -> bool {
        let idx = self.0.partition_point(|r| r.end() < range.start());
        self.0.get(idx).is_some_and(|r| r.intersects(range))
    }

    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &RangeSet<T>) -> RangeSet<T> {
        Self(TimeSpanRange::union(self.0.iter().chain(other.0.iter())).collect())
    }

    /// Returns the intersection of `self` and `other`.
    pub fn intersection(&self, other: &RangeSet<T>) -> RangeSet<T> {
        Self::from_sorted_unchecked(compute_intersection(&self.0, &other.0))
    }

    /// Returns the complement of `self` within the whole timeline.
    pub fn complement(&self) -> RangeSet<T> {
        Self::from_sorted_unchecked(compute_complement(&self.0))
    }

    /// Sum of the lengths of all ranges, in unit `U`.
    pub fn total_duration_in<U>(&self) -> Quantity<U>
    where
        U: Unit,
        Second: SameDim<U>,
    {
        let seconds = self
            .0
            .iter()
            .map(|r| T::whole_seconds(r.duration()))
            .fold(0i64, i64::saturating_add);
        units::from_seconds(seconds)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> Deref for RangeSet<T> {
    type Target = [TimeSpanRange<T>];

    fn deref(&self) -> &[TimeSpanRange<T>] {
        &self.0
    }
}

impl<T: Instant> AsRef<[TimeSpanRange<T>]> for RangeSet<T> {
    fn as_ref(&self) -> &[TimeSpanRange<T>] {
        &self.0
    }
}

impl<T: Instant> Index<usize> for RangeSet<T> {
    type Output = TimeSpanRange<T>;

    fn index(&self, index: usize) -> &TimeSpanRange<T> {
        &self.0[index]
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<T: Instant> From<Vec<TimeSpanRange<T>>> for RangeSet<T> {
    /// Creates a `RangeSet` from unsorted ranges, merging on construction.
    fn from(vec: Vec<TimeSpanRange<T>>) -> Self {
        let mut set = Self(vec);
        set.normalize();
        set
    }
}

impl<T: Instant> From<TimeSpanRange<T>> for RangeSet<T> {
    fn from(range: TimeSpanRange<T>) -> Self {
        Self(vec![range])
    }
}

impl<T: Instant> FromIterator<TimeSpanRange<T>> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = TimeSpanRange<T>>>(iter: I) -> Self {
        Self(TimeSpanRange::union(iter).collect())
    }
}

impl<T: Instant> Extend<TimeSpanRange<T>> for RangeSet<T> {
    fn extend<I: IntoIterator<Item = TimeSpanRange<T>>>(&mut self, iter: I) {
        self.0.extend(iter);
        self.normalize();
    }
}

impl<T: Instant> IntoIterator for RangeSet<T> {
    type Item = TimeSpanRange<T>;
    type IntoIter = std::vec::IntoIter<TimeSpanRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Instant> IntoIterator for &'a RangeSet<T> {
    type Item = &'a TimeSpanRange<T>;
    type IntoIter = std::slice::Iter<'a, TimeSpanRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Instant> Default for RangeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Instant + Display> Display for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, range) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", range)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(range_set, vec![...])` in tests.
impl<T: Instant> PartialEq<Vec<TimeSpanRange<T>>> for RangeSet<T> {
    fn eq(&self, other: &Vec<TimeSpanRange<T>>) -> bool {
        self.0 == *other
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T> serde::Serialize for RangeSet<T>
where
    T: Instant + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RangeSet<T>
where
    T: Instant + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = Vec::<TimeSpanRange<T>>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
