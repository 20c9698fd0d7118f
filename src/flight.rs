//! Flight offers as handed over by the search-result providers.
//!
//! A provider scrapes departure and arrival times and builds a
//! [`FlightOffer`]; everything time-related about the offer then goes through
//! its [`TimeSpanRange`]. Times are local wall-clock times of the search, so
//! they are kept as [`NaiveDateTime`].

use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::range_set::RangeSet;
use crate::span::{RangeError, TimeSpanRange};

/// One priced itinerary from a search result page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightOffer {
    origin: String,
    destination: String,
    when: TimeSpanRange<NaiveDateTime>,
    #[cfg_attr(feature = "serde", serde(default))]
    carrier: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    total_price_cents: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    stops: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    uid: Option<String>,
}

impl FlightOffer {
    /// Creates an offer flying `origin` → `destination` over `[departure, arrival]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EndBeforeStart`] if the arrival precedes the departure.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    ) -> Result<Self, RangeError<NaiveDateTime>> {
        Ok(Self {
            origin: origin.into(),
            destination: destination.into(),
            when: TimeSpanRange::new(departure, arrival)?,
            carrier: None,
            total_price_cents: 0,
            stops: 0,
            url: None,
            uid: None,
        })
    }

    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }

    pub fn with_price_cents(mut self, cents: u64) -> Self {
        self.total_price_cents = cents;
        self
    }

    pub fn with_stops(mut self, stops: u32) -> Self {
        self.stops = stops;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn when(&self) -> TimeSpanRange<NaiveDateTime> {
        self.when
    }

    pub fn carrier(&self) -> Option<&str> {
        self.carrier.as_deref()
    }

    pub fn total_price_cents(&self) -> u64 {
        self.total_price_cents
    }

    pub fn stops(&self) -> u32 {
        self.stops
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn title(&self) -> String {
        format!("Flight from {} to {}", self.origin, self.destination)
    }

    /// Calendar days between departure and arrival dates, the "+1" shown
    /// next to overnight arrivals.
    pub fn arrival_day_offset(&self) -> i64 {
        self.when
            .end()
            .date()
            .signed_duration_since(self.when.start().date())
            .num_days()
    }
}

/// Offers whose flight time overlaps `window`, touching included.
pub fn offers_intersecting<'a>(
    offers: &'a [FlightOffer],
    window: &'a TimeSpanRange<NaiveDateTime>,
) -> impl Iterator<Item = &'a FlightOffer> + 'a {
    tracing::trace!(offers = offers.len(), %window, "filtering offers intersecting window");
    offers.iter().filter(move |offer| offer.when.intersects(window))
}

/// Offers that depart and arrive inside `window`.
pub fn offers_within<'a>(
    offers: &'a [FlightOffer],
    window: &'a TimeSpanRange<NaiveDateTime>,
) -> impl Iterator<Item = &'a FlightOffer> + 'a {
    tracing::trace!(offers = offers.len(), %window, "filtering offers within window");
    offers.iter().filter(move |offer| window.contains_range(&offer.when))
}

/// Time spent in the air across `offers`, merged into disjoint periods.
pub fn busy_periods(offers: &[FlightOffer]) -> RangeSet<NaiveDateTime> {
    let busy: RangeSet<NaiveDateTime> = offers.iter().map(FlightOffer::when).collect();
    tracing::debug!(offers = offers.len(), periods = busy.len(), "merged busy periods");
    busy
}

/// Time not covered by any of `offers`.
pub fn free_periods(offers: &[FlightOffer]) -> RangeSet<NaiveDateTime> {
    busy_periods(offers).complement()
}
