//! Points on the timeline that a [`TimeSpanRange`](crate::TimeSpanRange) can span.
//!
//! The algebra only needs a totally ordered instant with fixed minimum and
//! maximum values, a way to measure the distance between two instants, and
//! a checked way to move forward by such a distance. The chrono types used by
//! the flight-record providers implement it out of the box.

use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

/// A totally ordered point in time with absolute bounds.
pub trait Instant: Copy + Ord + Hash + Debug {
    /// Signed distance between two instants.
    type Duration: Copy + Ord + Debug;

    /// Earliest representable instant.
    const MIN: Self;

    /// Latest representable instant.
    const MAX: Self;

    /// Returns `self - earlier`.
    fn duration_since(self, earlier: Self) -> Self::Duration;

    /// Returns `self + duration`, or `None` if the result leaves the representable range.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;

    /// Whole seconds in `duration`, truncated toward zero.
    fn whole_seconds(duration: Self::Duration) -> i64;
}

impl Instant for DateTime<Utc> {
    type Duration = TimeDelta;

    const MIN: Self = DateTime::<Utc>::MIN_UTC;
    const MAX: Self = DateTime::<Utc>::MAX_UTC;

    fn duration_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }

    fn checked_add(self, duration: TimeDelta) -> Option<Self> {
        self.checked_add_signed(duration)
    }

    fn whole_seconds(duration: TimeDelta) -> i64 {
        duration.num_seconds()
    }
}

impl Instant for NaiveDateTime {
    type Duration = TimeDelta;

    const MIN: Self = NaiveDateTime::MIN;
    const MAX: Self = NaiveDateTime::MAX;

    fn duration_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }

    fn checked_add(self, duration: TimeDelta) -> Option<Self> {
        self.checked_add_signed(duration)
    }

    fn whole_seconds(duration: TimeDelta) -> i64 {
        duration.num_seconds()
    }
}

impl Instant for NaiveDate {
    type Duration = TimeDelta;

    const MIN: Self = NaiveDate::MIN;
    const MAX: Self = NaiveDate::MAX;

    fn duration_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }

    fn checked_add(self, duration: TimeDelta) -> Option<Self> {
        self.checked_add_signed(duration)
    }

    fn whole_seconds(duration: TimeDelta) -> i64 {
        duration.num_seconds()
    }
}
