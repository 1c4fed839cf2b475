//! Bookings

use std::{fmt, str::FromStr};

use jiff::civil::{Date, Time};
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;
use tracing::info;

use crate::{
    quote::{BookingQuote, EndTime},
    slots::format_time,
};

new_key_type! {
    /// Booking Key
    pub struct BookingKey;
}

/// Errors related to managing bookings.
#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    /// No booking exists for the key.
    #[error("Booking not found")]
    BookingNotFound(BookingKey),

    /// Only confirmed bookings can be cancelled.
    #[error("Booking is {0} and cannot be cancelled")]
    NotCancellable(BookingStatus),

    /// The booking is not open for review.
    #[error("Booking cannot be reviewed")]
    NotReviewable(BookingKey),

    /// Unrecognised bookings tab name.
    #[error("Unknown bookings tab: {0}")]
    UnknownTab(String),
}

/// Lifecycle of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Booked and still to be played
    Confirmed,

    /// Played
    Completed,

    /// Cancelled by the player
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        })
    }
}

/// The two tabs on the bookings list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingTab {
    /// Confirmed bookings, soonest first
    #[default]
    Upcoming,

    /// Completed bookings, most recent first
    Past,
}

impl FromStr for BookingTab {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "past" => Ok(Self::Past),
            other => Err(BookingError::UnknownTab(other.to_string())),
        }
    }
}

/// A court booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking<'a> {
    /// Name of the booked court
    pub court_name: String,

    /// Location of the booked court
    pub location: String,

    /// Day of play
    pub date: Date,

    /// Start time
    pub start: Time,

    /// End time
    pub end: EndTime,

    /// Amount paid
    pub price: Money<'a, Currency>,

    /// Current status
    pub status: BookingStatus,

    /// Whether the player may still leave a review
    pub can_review: bool,
}

impl Booking<'_> {
    /// Time range formatted as `HH:MM - HH:MM`
    pub fn time_range(&self) -> String {
        format!("{} - {}", format_time(self.start), self.end)
    }
}

impl<'a> From<BookingQuote<'a>> for Booking<'a> {
    fn from(quote: BookingQuote<'a>) -> Self {
        Self {
            court_name: quote.court_name().to_string(),
            location: quote.location().to_string(),
            date: quote.date(),
            start: quote.start(),
            end: quote.end(),
            price: quote.total(),
            status: BookingStatus::Confirmed,
            can_review: false,
        }
    }
}

/// A player's bookings.
#[derive(Debug, Default)]
pub struct Bookings<'a> {
    bookings: SlotMap<BookingKey, Booking<'a>>,
}

impl<'a> Bookings<'a> {
    /// Create an empty bookings list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing booking
    pub fn insert(&mut self, booking: Booking<'a>) -> BookingKey {
        self.bookings.insert(booking)
    }

    /// Record a confirmed quote as a new booking
    pub fn record(&mut self, quote: BookingQuote<'a>) -> BookingKey {
        let booking = Booking::from(quote);

        info!(
            court = %booking.court_name,
            date = %booking.date,
            time = %booking.time_range(),
            "booking recorded"
        );

        self.insert(booking)
    }

    /// Get a booking
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::BookingNotFound`] if there is no such booking.
    pub fn get(&self, key: BookingKey) -> Result<&Booking<'a>, BookingError> {
        self.bookings
            .get(key)
            .ok_or(BookingError::BookingNotFound(key))
    }

    /// Bookings shown on `tab`
    pub fn tab(&self, tab: BookingTab) -> Vec<(BookingKey, &Booking<'a>)> {
        match tab {
            BookingTab::Upcoming => self.upcoming(),
            BookingTab::Past => self.past(),
        }
    }

    /// Confirmed bookings, soonest first
    pub fn upcoming(&self) -> Vec<(BookingKey, &Booking<'a>)> {
        let mut upcoming = self.with_status(BookingStatus::Confirmed);

        upcoming.sort_by_key(|(_, booking)| (booking.date, booking.start));

        upcoming
    }

    /// Completed bookings, most recent first
    pub fn past(&self) -> Vec<(BookingKey, &Booking<'a>)> {
        let mut past = self.with_status(BookingStatus::Completed);

        past.sort_by_key(|(_, booking)| std::cmp::Reverse((booking.date, booking.start)));

        past
    }

    fn with_status(&self, status: BookingStatus) -> Vec<(BookingKey, &Booking<'a>)> {
        self.bookings
            .iter()
            .filter(|(_, booking)| booking.status == status)
            .collect()
    }

    /// Cancel a confirmed booking
    ///
    /// # Errors
    ///
    /// - [`BookingError::BookingNotFound`]: there is no such booking.
    /// - [`BookingError::NotCancellable`]: the booking is not confirmed.
    pub fn cancel(&mut self, key: BookingKey) -> Result<(), BookingError> {
        let booking = self
            .bookings
            .get_mut(key)
            .ok_or(BookingError::BookingNotFound(key))?;

        if booking.status != BookingStatus::Confirmed {
            return Err(BookingError::NotCancellable(booking.status));
        }

        booking.status = BookingStatus::Cancelled;

        info!(court = %booking.court_name, date = %booking.date, "booking cancelled");

        Ok(())
    }

    /// Check that a booking can be reviewed
    ///
    /// # Errors
    ///
    /// - [`BookingError::BookingNotFound`]: there is no such booking.
    /// - [`BookingError::NotReviewable`]: the booking is not completed or was already reviewed.
    pub fn review(&self, key: BookingKey) -> Result<&Booking<'a>, BookingError> {
        let booking = self.get(key)?;

        if booking.status == BookingStatus::Completed && booking.can_review {
            Ok(booking)
        } else {
            Err(BookingError::NotReviewable(key))
        }
    }

    /// Number of bookings, whatever their status
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Whether there are no bookings
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
