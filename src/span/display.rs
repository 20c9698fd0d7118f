//! Human-readable rendering of ranges.

use std::fmt::{self, Display};

use chrono::Datelike;

use super::range::TimeSpanRange;
use crate::instant::Instant;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Formats whole seconds as `"{d}d {h}h {mm}m {ss}s"`, dropping the day part
/// and the seconds part when zero.
fn write_duration(f: &mut fmt::Formatter<'_>, seconds: i64) -> fmt::Result {
    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = seconds % SECONDS_PER_MINUTE;
    if days > 0 {
        write!(f, "{}d ", days)?;
    }
    write!(f, "{}h {:02}m", hours, minutes)?;
    if secs > 0 {
        write!(f, " {:02}s", secs)?;
    }
    Ok(())
}

impl<T: Instant + Display> Display for TimeSpanRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_never() {
            return write!(f, "Never");
        }
        if self.is_anytime() {
            return write!(f, "Anytime");
        }
        write!(f, "{} - {} [", self.start(), self.end())?;
        write_duration(f, T::whole_seconds(self.duration()))?;
        write!(f, "]")
    }
}

/// Date-only rendering returned by [`TimeSpanRange::dates`].
#[derive(Debug, Clone, Copy)]
pub struct DateDisplay<T: Instant> {
    range: TimeSpanRange<T>,
}

impl<T: Instant + Datelike> TimeSpanRange<T> {
    /// Renders as `"YYYY-MM-DD - YYYY-MM-DD [days]"`, days rounded to the nearest whole day.
    pub fn dates(&self) -> DateDisplay<T> {
        DateDisplay { range: *self }
    }
}

impl<T: Instant + Datelike> Display for DateDisplay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = &self.range;
        if range.is_never() {
            return write!(f, "Never");
        }
        if range.is_anytime() {
            return write!(f, "Anytime");
        }
        let (start, end) = (range.start(), range.end());
        let seconds = T::whole_seconds(range.duration());
        let days = (seconds + SECONDS_PER_DAY / 2) / SECONDS_PER_DAY;
        write!(
            f,
            "{:04}-{:02}-{:02} - {:04}-{:02}-{:02} [{}]",
            start.year(),
            start.month(),
            start.day(),
            end.year(),
            end.month(),
            end.day(),
            days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    type Span = TimeSpanRange<NaiveDateTime>;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn sentinels_render_by_name() {
        assert_eq!(Span::NEVER.to_string(), "Never");
        assert_eq!(Span::ANYTIME.to_string(), "Anytime");
        assert_eq!(Span::NEVER.dates().to_string(), "Never");
        assert_eq!(Span::ANYTIME.dates().to_string(), "Anytime");
    }

    #[test]
    fn renders_start_end_and_duration() {
        let range = Span::new(at(1, 20, 35), at(2, 0, 35)).unwrap();
        assert_eq!(
            range.to_string(),
            "2024-01-01 20:35:00 - 2024-01-02 00:35:00 [4h 00m]"
        );
    }

    #[test]
    fn renders_day_part_for_long_ranges() {
        let range = Span::new(at(1, 8, 0), at(3, 10, 41)).unwrap();
        assert!(range.to_string().ends_with("[2d 2h 41m]"));
    }

    #[test]
    fn zero_length_range_away_from_min_is_not_never() {
        let range = Span::new(at(1, 8, 0), at(1, 8, 0)).unwrap();
        assert_eq!(range.to_string(), "2024-01-01 08:00:00 - 2024-01-01 08:00:00 [0h 00m]");
    }

    #[test]
    fn renders_leftover_seconds() {
        let start = at(1, 8, 0);
        let range = Span::new(start, start + chrono::TimeDelta::seconds(90)).unwrap();
        assert!(range.to_string().ends_with("[0h 01m 30s]"));
    }

    #[test]
    fn dates_round_to_nearest_day() {
        let range = Span::new(at(1, 8, 0), at(3, 22, 0)).unwrap();
        assert_eq!(range.dates().to_string(), "2024-01-01 - 2024-01-03 [3]");

        let short = Span::new(at(1, 8, 0), at(1, 19, 0)).unwrap();
        assert_eq!(short.dates().to_string(), "2024-01-01 - 2024-01-01 [0]");
    }
}
