//! spanalg - time-span range algebra for flight search windows
//!
//! A closed range type over chrono instants with containment, intersection,
//! union and complement, plus the flight-offer record that scraping
//! providers hand over and the helpers that filter offers by search window.

pub mod flight;
pub mod instant;
pub mod operations;
pub mod range_set;
pub mod span;
pub mod units;

pub use flight::FlightOffer;
pub use instant::Instant;
pub use range_set::RangeSet;
pub use span::{DateDisplay, RangeError, TimeSpanRange};

/// Range over UTC timestamps.
pub type UtcRange = TimeSpanRange<chrono::DateTime<chrono::Utc>>;
