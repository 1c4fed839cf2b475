//! Integration tests for booking quote arithmetic and selection checks

use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use padel::prelude::*;

#[test]
fn total_price_is_hourly_price_times_duration() -> TestResult {
    let cases = [
        (2500, BookingDuration::OneHour, 2500),
        (2500, BookingDuration::NinetyMinutes, 3750),
        (3000, BookingDuration::TwoHours, 6000),
    ];

    for (hourly, duration, expected) in cases {
        assert_eq!(
            compute_total_price(&Money::from_minor(hourly, USD), duration)?,
            Money::from_minor(expected, USD)
        );
    }

    Ok(())
}

#[test]
fn end_times_for_each_duration() -> TestResult {
    assert_eq!(compute_end_time("14:00", Decimal::ONE)?.to_string(), "15:00");
    assert_eq!(compute_end_time("14:00", Decimal::new(15, 1))?.to_string(), "15:30");
    assert_eq!(compute_end_time("21:00", Decimal::new(2, 0))?.to_string(), "23:00");

    Ok(())
}

#[test]
fn late_bookings_roll_over_to_the_next_day() -> TestResult {
    let end = compute_end_time("23:00", Decimal::new(15, 1))?;

    assert!(end.is_next_day());
    assert_eq!(end.time(), parse_time("00:30")?);

    Ok(())
}

#[test]
fn hourly_starts_end_on_the_hour_or_half_hour() -> TestResult {
    for hour in 0..24 {
        for duration in BookingDuration::ALL {
            let end = compute_end_time(&format!("{hour:02}:00"), duration.hours())?;

            assert!(matches!(end.time().minute(), 0 | 30));
        }
    }

    Ok(())
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(
        compute_end_time("14h00", Decimal::ONE),
        Err(QuoteError::InvalidTimeFormat(_))
    ));
    assert!(matches!(
        compute_end_time("14:00", Decimal::new(3, 0)),
        Err(QuoteError::UnsupportedDuration(_))
    ));
}

#[test]
fn selection_needs_both_date_and_slot() {
    assert!(validate_selection("", "14:00").is_err());
    assert!(validate_selection("2024-01-25", "").is_err());
    assert!(validate_selection("2024-01-25", "14:00").is_ok());
}
