use thiserror::Error;

use crate::instant::Instant;

/// Errors raised when building a [`TimeSpanRange`](super::TimeSpanRange).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError<T: Instant> {
    #[error("The end {end:?} cannot be before the start {start:?}")]
    EndBeforeStart { start: T, end: T },

    #[error("Adding {duration:?} to {start:?} leaves the representable timeline")]
    DurationOverflow { start: T, duration: T::Duration },
}
