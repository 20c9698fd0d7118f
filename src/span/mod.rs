//! The time-span range value type.
//!
//! [`TimeSpanRange`] is the "when" of a flight or an availability window.
//! It answers containment and overlap questions and derives new ranges via
//! intersection, union and complement.

mod display;
mod error;
mod range;


pub use display::DateDisplay;
pub use error::RangeError;
pub use range::TimeSpanRange;
