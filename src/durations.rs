//! Durations

use std::{fmt, str::FromStr};

use jiff::SignedDuration;
use rust_decimal::Decimal;

use crate::quote::QuoteError;

/// Length of a court booking.
///
/// Courts are only bookable in these three blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BookingDuration {
    /// 1 hour
    #[default]
    OneHour,

    /// 1.5 hours
    NinetyMinutes,

    /// 2 hours
    TwoHours,
}

impl BookingDuration {
    /// Every bookable duration, shortest first.
    pub const ALL: [Self; 3] = [Self::OneHour, Self::NinetyMinutes, Self::TwoHours];

    /// Duration in hours.
    pub fn hours(self) -> Decimal {
        match self {
            Self::OneHour => Decimal::ONE,
            Self::NinetyMinutes => Decimal::new(15, 1),
            Self::TwoHours => Decimal::new(2, 0),
        }
    }

    /// Duration in whole minutes.
    pub fn minutes(self) -> i64 {
        match self {
            Self::OneHour => 60,
            Self::NinetyMinutes => 90,
            Self::TwoHours => 120,
        }
    }

    /// Duration as a `jiff` signed duration, for clock arithmetic.
    pub fn as_signed_duration(self) -> SignedDuration {
        SignedDuration::from_mins(self.minutes())
    }

    /// Label shown on the duration picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::OneHour => "1 hour",
            Self::NinetyMinutes => "1.5 hours",
            Self::TwoHours => "2 hours",
        }
    }
}

impl TryFrom<Decimal> for BookingDuration {
    type Error = QuoteError;

    fn try_from(hours: Decimal) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|duration| duration.hours() == hours)
            .ok_or(QuoteError::UnsupportedDuration(hours))
    }
}

impl FromStr for BookingDuration {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hours = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| QuoteError::InvalidDuration(s.to_string()))?;

        Self::try_from(hours)
    }
}

impl fmt::Display for BookingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hours().normalize())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn hours_match_the_picker_values() {
        let hours: Vec<String> = BookingDuration::ALL
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(hours, ["1", "1.5", "2"]);
    }

    #[test]
    fn try_from_ignores_decimal_scale() -> TestResult {
        assert_eq!(
            BookingDuration::try_from(Decimal::new(150, 2))?,
            BookingDuration::NinetyMinutes
        );

        Ok(())
    }

    #[test]
    fn try_from_rejects_other_lengths() {
        let result = BookingDuration::try_from(Decimal::new(25, 1));

        assert!(matches!(result, Err(QuoteError::UnsupportedDuration(hours)) if hours == Decimal::new(25, 1)));
    }

    #[test]
    fn from_str_parses_hours() -> TestResult {
        assert_eq!("2".parse::<BookingDuration>()?, BookingDuration::TwoHours);
        assert_eq!(" 1.5 ".parse::<BookingDuration>()?, BookingDuration::NinetyMinutes);

        Ok(())
    }

    #[test]
    fn from_str_rejects_non_numbers() {
        let result = "an hour".parse::<BookingDuration>();

        assert!(matches!(result, Err(QuoteError::InvalidDuration(_))));
    }

    #[test]
    fn minutes_agree_with_hours() {
        for duration in BookingDuration::ALL {
            assert_eq!(
                Decimal::from(duration.minutes()),
                duration.hours() * Decimal::from(60)
            );
        }
    }

    #[test]
    fn labels() {
        assert_eq!(BookingDuration::OneHour.label(), "1 hour");
        assert_eq!(BookingDuration::NinetyMinutes.label(), "1.5 hours");
        assert_eq!(BookingDuration::TwoHours.label(), "2 hours");
    }
}
