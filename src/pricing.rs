//! Prices

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::durations::BookingDuration;

/// Errors that can occur while calculating a booking price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// The total does not fit in the currency's minor units.
    #[error("total price overflows")]
    Overflow,
}

/// Calculates the price of booking a court for `duration` at `hourly_price`.
///
/// The exact product is rounded to the currency's minor unit, with halves
/// rounded away from zero.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: the total does not fit in the currency's minor units.
pub fn compute_total_price<'a>(
    hourly_price: &Money<'a, Currency>,
    duration: BookingDuration,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let minor_units = Decimal::from(hourly_price.to_minor_units())
        .checked_mul(duration.hours())
        .map(|total| total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|total| total.to_i64())
        .ok_or(TotalPriceError::Overflow)?;

    Ok(Money::from_minor(minor_units, hourly_price.currency()))
}

/// Returns the amount of `money` in major units (e.g. `25.50` for $25.50).
pub fn major_units(money: &Money<'_, Currency>) -> Decimal {
    Decimal::new(money.to_minor_units(), money.currency().exponent)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, JPY, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn one_hour_is_the_hourly_price() -> TestResult {
        let total = compute_total_price(&Money::from_minor(2500, USD), BookingDuration::OneHour)?;

        assert_eq!(total, Money::from_minor(2500, USD));

        Ok(())
    }

    #[test]
    fn ninety_minutes_is_one_and_a_half_hours() -> TestResult {
        let total = compute_total_price(&Money::from_minor(2500, USD), BookingDuration::NinetyMinutes)?;

        assert_eq!(total, Money::from_minor(3750, USD));

        Ok(())
    }

    #[test]
    fn two_hours_doubles_the_price() -> TestResult {
        let total = compute_total_price(&Money::from_minor(3000, USD), BookingDuration::TwoHours)?;

        assert_eq!(total, Money::from_minor(6000, USD));

        Ok(())
    }

    #[test]
    fn half_minor_units_round_away_from_zero() -> TestResult {
        let total = compute_total_price(&Money::from_minor(2501, GBP), BookingDuration::NinetyMinutes)?;

        assert_eq!(total, Money::from_minor(3752, GBP));

        Ok(())
    }

    #[test]
    fn currency_is_preserved() -> TestResult {
        let total = compute_total_price(&Money::from_minor(3001, JPY), BookingDuration::NinetyMinutes)?;

        assert_eq!(total, Money::from_minor(4502, JPY));

        Ok(())
    }

    #[test]
    fn overflow_is_reported() {
        let result = compute_total_price(&Money::from_minor(i64::MAX, USD), BookingDuration::TwoHours);

        assert!(matches!(result, Err(TotalPriceError::Overflow)));
    }

    #[test]
    fn major_units_respect_currency_exponent() {
        assert_eq!(major_units(&Money::from_minor(2550, USD)), Decimal::new(255, 1));
        assert_eq!(major_units(&Money::from_minor(2550, JPY)), Decimal::from(2550));
    }
}
