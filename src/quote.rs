//! Booking Quotes
//!
//! A quote is the in-progress combination of a court, a date, a start time
//! and a duration, together with the end time and price derived from them.

use std::fmt;

use jiff::civil::{Date, Time};
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    courts::Court,
    durations::BookingDuration,
    pricing::{TotalPriceError, compute_total_price},
    slots::{format_time, parse_time},
};

/// Errors raised while composing a quote.
#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    /// A start time was not a 24-hour `HH:MM` time.
    #[error("Invalid time format: {0:?}, expected HH:MM")]
    InvalidTimeFormat(String),

    /// A duration could not be parsed as a number of hours.
    #[error("Invalid duration: {0:?}")]
    InvalidDuration(String),

    /// Courts are only bookable for 1, 1.5 or 2 hours.
    #[error("Unsupported duration: {0} hours")]
    UnsupportedDuration(Decimal),

    /// The date, the time slot, or both have not been chosen.
    #[error("Please select a date and time slot.")]
    IncompleteSelection {
        /// No date has been chosen
        missing_date: bool,

        /// No time slot has been chosen
        missing_slot: bool,
    },

    /// Price arithmetic failed.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// End of a booking, on the booking date or the day after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndTime {
    time: Time,
    next_day: bool,
}

impl EndTime {
    /// Clock time the booking ends at
    pub fn time(&self) -> Time {
        self.time
    }

    /// Whether the booking runs past midnight
    pub fn is_next_day(&self) -> bool {
        self.next_day
    }
}

impl fmt::Display for EndTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.time))?;

        if self.next_day {
            f.write_str(" (+1 day)")?;
        }

        Ok(())
    }
}

/// Computes when a booking starting at `start` and lasting `duration` ends.
///
/// Minutes carry into hours and hours wrap at midnight, flagging the end as
/// falling on the next day.
pub fn end_time(start: Time, duration: BookingDuration) -> EndTime {
    let time = start.wrapping_add(duration.as_signed_duration());

    EndTime {
        time,
        next_day: time < start,
    }
}

/// Computes the end time for an `HH:MM` start and a duration in hours.
///
/// # Errors
///
/// - [`QuoteError::InvalidTimeFormat`]: `start` is not a valid `HH:MM` time.
/// - [`QuoteError::UnsupportedDuration`]: `duration_hours` is not 1, 1.5 or 2.
pub fn compute_end_time(start: &str, duration_hours: Decimal) -> Result<EndTime, QuoteError> {
    let start = parse_time(start)?;
    let duration = BookingDuration::try_from(duration_hours)?;

    Ok(end_time(start, duration))
}

/// Checks that both a date and a time slot have been chosen.
///
/// Only empty values count as not chosen; content is not inspected.
///
/// # Errors
///
/// Returns [`QuoteError::IncompleteSelection`] naming whichever of the two is missing.
pub fn validate_selection(date: &str, time_slot: &str) -> Result<(), QuoteError> {
    check_selection(!date.is_empty(), !time_slot.is_empty())
}

/// Returns the chosen date and start time, if both are present.
///
/// # Errors
///
/// Returns [`QuoteError::IncompleteSelection`] naming whichever of the two is missing.
pub fn require_selection(date: Option<Date>, slot: Option<Time>) -> Result<(Date, Time), QuoteError> {
    match (date, slot) {
        (Some(date), Some(slot)) => Ok((date, slot)),
        (date, slot) => Err(QuoteError::IncompleteSelection {
            missing_date: date.is_none(),
            missing_slot: slot.is_none(),
        }),
    }
}

fn check_selection(has_date: bool, has_slot: bool) -> Result<(), QuoteError> {
    if has_date && has_slot {
        Ok(())
    } else {
        Err(QuoteError::IncompleteSelection {
            missing_date: !has_date,
            missing_slot: !has_slot,
        })
    }
}

/// A priced booking for one court, date and time range.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuote<'a> {
    court_name: String,
    location: String,
    date: Date,
    start: Time,
    end: EndTime,
    duration: BookingDuration,
    total: Money<'a, Currency>,
}

impl<'a> BookingQuote<'a> {
    /// Prices a booking of `court` on `date` from `start` for `duration`
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::TotalPrice`] if the total cannot be represented.
    pub fn new(
        court: &Court<'a>,
        date: Date,
        start: Time,
        duration: BookingDuration,
    ) -> Result<Self, QuoteError> {
        Ok(Self {
            court_name: court.name.clone(),
            location: court.location.clone(),
            date,
            start,
            end: end_time(start, duration),
            duration,
            total: compute_total_price(&court.price, duration)?,
        })
    }

    /// Name of the booked court
    pub fn court_name(&self) -> &str {
        &self.court_name
    }

    /// Location of the booked court
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Booking date
    pub fn date(&self) -> Date {
        self.date
    }

    /// Start time
    pub fn start(&self) -> Time {
        self.start
    }

    /// End time
    pub fn end(&self) -> EndTime {
        self.end
    }

    /// Booking length
    pub fn duration(&self) -> BookingDuration {
        self.duration
    }

    /// Total price
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Time range formatted as `HH:MM - HH:MM`
    pub fn time_range(&self) -> String {
        format!("{} - {}", format_time(self.start), self.end)
    }
}

impl fmt::Display for BookingQuote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Time: {}", self.time_range())?;
        writeln!(f, "Duration: {} hour(s)", self.duration)?;
        write!(f, "Total: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;
    use crate::courts::tests::court;

    fn hours(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    #[test]
    fn end_time_adds_whole_hours() -> TestResult {
        assert_eq!(compute_end_time("14:00", hours(1, 0))?.to_string(), "15:00");
        assert_eq!(compute_end_time("21:00", hours(2, 0))?.to_string(), "23:00");

        Ok(())
    }

    #[test]
    fn end_time_adds_half_hours_as_thirty_minutes() -> TestResult {
        assert_eq!(compute_end_time("14:00", hours(15, 1))?.to_string(), "15:30");

        Ok(())
    }

    #[test]
    fn end_time_carries_minutes_into_hours() -> TestResult {
        let end = compute_end_time("16:30", hours(15, 1))?;

        assert_eq!(end.time(), time(18, 0, 0, 0));
        assert!(!end.is_next_day());

        Ok(())
    }

    #[test]
    fn end_time_wraps_past_midnight() -> TestResult {
        let end = compute_end_time("23:00", hours(15, 1))?;

        assert_eq!(end.time(), time(0, 30, 0, 0));
        assert!(end.is_next_day());
        assert_eq!(end.to_string(), "00:30 (+1 day)");

        Ok(())
    }

    #[test]
    fn end_time_ending_exactly_at_midnight_is_next_day() -> TestResult {
        let end = compute_end_time("22:00", hours(2, 0))?;

        assert_eq!(end.to_string(), "00:00 (+1 day)");

        Ok(())
    }

    #[test]
    fn end_minutes_are_on_the_half_hour_for_hourly_starts() -> TestResult {
        for hour in 0..24 {
            for duration in BookingDuration::ALL {
                let end = end_time(Time::new(hour, 0, 0, 0)?, duration);

                assert!(matches!(end.time().minute(), 0 | 30));
            }
        }

        Ok(())
    }

    #[test]
    fn compute_end_time_rejects_malformed_start() {
        let result = compute_end_time("2pm", hours(1, 0));

        assert_eq!(result, Err(QuoteError::InvalidTimeFormat("2pm".to_string())));
    }

    #[test]
    fn compute_end_time_rejects_unsupported_duration() {
        let result = compute_end_time("14:00", hours(3, 0));

        assert_eq!(result, Err(QuoteError::UnsupportedDuration(hours(3, 0))));
    }

    #[test]
    fn validate_selection_requires_date_and_slot() {
        assert_eq!(
            validate_selection("", "14:00"),
            Err(QuoteError::IncompleteSelection {
                missing_date: true,
                missing_slot: false,
            })
        );
        assert_eq!(
            validate_selection("2024-01-25", ""),
            Err(QuoteError::IncompleteSelection {
                missing_date: false,
                missing_slot: true,
            })
        );
        assert_eq!(validate_selection("2024-01-25", "14:00"), Ok(()));
    }

    #[test]
    fn validate_selection_only_checks_presence() {
        assert_eq!(validate_selection(" ", "14:00"), Ok(()));
        assert_eq!(validate_selection("2024-01-25", " "), Ok(()));
    }

    #[test]
    fn incomplete_selection_has_a_single_message() {
        let missing_both = QuoteError::IncompleteSelection {
            missing_date: true,
            missing_slot: true,
        };

        assert_eq!(missing_both.to_string(), "Please select a date and time slot.");
    }

    #[test]
    fn require_selection_returns_both_values() -> TestResult {
        let chosen = require_selection(Some(date(2024, 1, 25)), Some(time(14, 0, 0, 0)))?;

        assert_eq!(chosen, (date(2024, 1, 25), time(14, 0, 0, 0)));
        assert!(require_selection(None, Some(time(14, 0, 0, 0))).is_err());

        Ok(())
    }

    #[test]
    fn quote_derives_end_time_and_total() -> TestResult {
        let court = court("Padel Club Central", 2500);
        let quote = BookingQuote::new(
            &court,
            date(2024, 1, 25),
            time(14, 0, 0, 0),
            BookingDuration::NinetyMinutes,
        )?;

        assert_eq!(quote.end().to_string(), "15:30");
        assert_eq!(quote.total(), Money::from_minor(3750, USD));
        assert_eq!(quote.time_range(), "14:00 - 15:30");
        assert_eq!(quote.court_name(), "Padel Club Central");

        Ok(())
    }

    #[test]
    fn quote_displays_as_confirmation_text() -> TestResult {
        let court = court("Padel Club Central", 2500);
        let quote = BookingQuote::new(
            &court,
            date(2024, 1, 25),
            time(14, 0, 0, 0),
            BookingDuration::OneHour,
        )?;

        assert_eq!(
            quote.to_string(),
            "Date: 2024-01-25\nTime: 14:00 - 15:00\nDuration: 1 hour(s)\nTotal: $25.00"
        );

        Ok(())
    }
}
