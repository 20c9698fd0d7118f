//! Closed time range `[start, end]` and its algebra.

use std::borrow::Borrow;

use qtty::{Quantity, Second, Unit};

use super::error::RangeError;
use crate::instant::Instant;
use crate::operations::{IntersectAll, Union};
use crate::units::{self, SameDim};

/// Continuous, closed span of time `[start, end]` with `start <= end`.
///
/// Ranges are plain values: copied freely, compared and hashed on the
/// `(start, end)` pair. The two sentinels [`ANYTIME`](Self::ANYTIME) and
/// [`NEVER`](Self::NEVER) are ordinary ranges with fixed bounds, so
/// `range == TimeSpanRange::NEVER` is the way to test for "no span".
///
/// Boundary policy: the boolean predicates ([`contains`](Self::contains),
/// [`intersects`](Self::intersects)) and [`union`](Self::union) treat touching
/// ranges as overlapping, while [`intersect`](Self::intersect) only produces a
/// span when the overlap has non-zero length.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use spanalg::TimeSpanRange;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let trip = TimeSpanRange::new(day(1), day(5)).unwrap();
/// let window = TimeSpanRange::new(day(4), day(12)).unwrap();
///
/// assert!(trip.intersects(&window));
/// assert_eq!(trip.intersect(&window), TimeSpanRange::new(day(4), day(5)).unwrap());
/// assert!(TimeSpanRange::new(day(5), day(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpanRange<T: Instant> {
    start: T,
    end: T,
}

impl<T: Instant> TimeSpanRange<T> {
    /// The whole timeline, `[MIN, MAX]`.
    pub const ANYTIME: Self = Self {
        start: T::MIN,
        end: T::MAX,
    };

    /// Zero-length range at the minimum instant; the result of operations
    /// that cannot produce a span.
    pub const NEVER: Self = Self {
        start: T::MIN,
        end: T::MIN,
    };

    /// Creates range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EndBeforeStart`] if `end < start`.
    pub fn new(start: T, end: T) -> Result<Self, RangeError<T>> {
        if end < start {
            tracing::debug!(?start, ?end, "rejected range with end before start");
            return Err(RangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Wraps bounds already known to satisfy `start <= end`.
    ///
    /// In debug builds this asserts the invariant.
    pub(crate) fn from_ordered_unchecked(start: T, end: T) -> Self {
        debug_assert!(start <= end, "from_ordered_unchecked called with end before start");
        Self { start, end }
    }

    /// Creates range `[start, start + duration]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::DurationOverflow`] if `start + duration` is not
    /// representable and [`RangeError::EndBeforeStart`] if `duration` is negative.
    pub fn from_duration(start: T, duration: T::Duration) -> Result<Self, RangeError<T>> {
        let end = start
            .checked_add(duration)
            .ok_or(RangeError::DurationOverflow { start, duration })?;
        Self::new(start, end)
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    /// Length of the range, computed from its bounds.
    pub fn duration(&self) -> T::Duration {
        self.end.duration_since(self.start)
    }

    /// Length of the range as a quantity of any time unit.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use qtty::Hour;
    /// use spanalg::TimeSpanRange;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    /// let range = TimeSpanRange::new(day(1), day(2)).unwrap();
    /// assert!((range.duration_in::<Hour>().value() - 24.0).abs() < 1e-9);
    /// ```
    pub fn duration_in<U>(&self) -> Quantity<U>
    where
        U: Unit,
        Second: SameDim<U>,
    {
        units::from_seconds(T::whole_seconds(self.duration()))
    }

    pub fn is_never(&self) -> bool {
        *self == Self::NEVER
    }

    pub fn is_anytime(&self) -> bool {
        *self == Self::ANYTIME
    }

    /// Returns true if `instant` ∈ `[start, end]`.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && self.end >= instant
    }

    /// Returns true if `other` lies entirely inside this range, bounds included.
    pub fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Returns true if the ranges share at least one instant. Touching ranges intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Returns the overlap of both ranges, or [`NEVER`](Self::NEVER) when the
    /// overlap is empty or a single instant.
    pub fn intersect(&self, other: &Self) -> Self {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Self { start, end }
        } else {
            Self::NEVER
        }
    }

    /// Lazily intersects this range with each of `ranges`, in input order,
    /// skipping the ones that yield [`NEVER`](Self::NEVER).
    ///
    /// The returned iterator is `Clone` whenever the input iterator is, so a
    /// borrowed slice can be walked any number of times.
    pub fn intersect_all<I>(&self, ranges: I) -> IntersectAll<T, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        IntersectAll::new(*self, ranges.into_iter())
    }

    /// Complement of this range within [`ANYTIME`](Self::ANYTIME).
    ///
    /// Yields `[MIN, start]` when `start > MIN`, then `[end, MAX]` when
    /// `end < MAX`. `ANYTIME` has no complement.
    pub fn inverse(&self) -> impl Iterator<Item = Self> + Clone {
        let pieces = if self.is_anytime() {
            [None, None]
        } else {
            [
                (self.start > T::MIN).then_some(Self {
                    start: T::MIN,
                    end: self.start,
                }),
                (self.end < T::MAX).then_some(Self {
                    start: self.end,
                    end: T::MAX,
                }),
            ]
        };
        pieces.into_iter().flatten()
    }

    /// Merges `ranges` into the minimal, ascending sequence of disjoint ranges
    /// covering the same instants. Overlapping and touching ranges are merged.
    pub fn union<I>(ranges: I) -> Union<T>
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        Union::new(ranges.into_iter().map(|r| *r.borrow()).collect())
    }
}

// =============================================================================
// TimeSpanRange Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for TimeSpanRange<T>
where
    T: Instant + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("TimeSpanRange", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for TimeSpanRange<T>
where
    T: Instant + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            start: T,
            end: T,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
