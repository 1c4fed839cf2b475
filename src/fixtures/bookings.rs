//! Booking Fixtures

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::bookings::BookingStatus;

/// Wrapper for bookings in YAML
#[derive(Debug, Deserialize)]
pub struct BookingsFixture {
    /// Bookings
    pub bookings: Vec<BookingFixture>,
}

/// Booking Fixture
#[derive(Debug, Deserialize)]
pub struct BookingFixture {
    /// Key of the booked court
    pub court: String,

    /// Day of play
    pub date: Date,

    /// Start time (e.g., "14:00")
    pub time: String,

    /// Length in hours
    pub duration: Decimal,

    /// Booking status
    pub status: BookingStatus,

    /// Whether a review can still be left
    #[serde(default)]
    pub can_review: bool,
}
