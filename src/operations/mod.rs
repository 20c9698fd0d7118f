//! Set-level operations over collections of ranges.

mod complement;
mod intersection;
mod union;

pub use complement::compute_complement;
pub use intersection::{compute_intersection, IntersectAll};
pub use union::Union;

#[cfg(debug_assertions)]
pub mod assertions;

#[cfg(not(debug_assertions))]
pub mod assertions {
    use crate::instant::Instant;
    use crate::span::TimeSpanRange;

    pub fn is_canonical<T: Instant>(_ranges: &[TimeSpanRange<T>]) -> bool {
        true
    }
}
