//! Booking Sessions
//!
//! A [`BookingSession`] owns the selection a player builds up for one court:
//! a date, a time slot and a duration. It moves through [`SessionState`]s as
//! the selection fills in and ends once the booking is confirmed.

use jiff::civil::{Date, Time};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    courts::Court,
    durations::BookingDuration,
    pricing::compute_total_price,
    quote::{BookingQuote, EndTime, QuoteError, end_time, require_selection},
    slots::{TimeSlot, find_slot, format_time, parse_time},
};

/// Where a session is in the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing chosen yet
    Empty,

    /// A date is chosen, no time slot yet
    DateChosen,

    /// A time slot is chosen, no date yet
    SlotChosen,

    /// Date and time slot are both chosen, the booking can be confirmed
    Ready,

    /// The booking was confirmed; the session accepts no further changes
    Confirmed,
}

/// Errors raised by a booking session.
///
/// None of these change the session's selection.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    /// The slot is not available and was not selected.
    #[error("Time slot {} is not available", hhmm(.0))]
    UnavailableSlotSelected(Time),

    /// The court has no slot starting at that time.
    #[error("No time slot starts at {}", hhmm(.0))]
    UnknownSlot(Time),

    /// Bookings cannot be made for days that have already passed.
    #[error("Cannot book {date}, the earliest bookable date is {today}")]
    DateInPast {
        /// The requested date
        date: Date,

        /// The earliest bookable date
        today: Date,
    },

    /// The session was already confirmed.
    #[error("Booking already confirmed")]
    AlreadyConfirmed,

    /// The selection could not be quoted.
    #[error(transparent)]
    Quote(#[from] QuoteError),
}

/// An in-progress booking for a single court.
#[derive(Debug)]
pub struct BookingSession<'s, 'a> {
    court: &'s Court<'a>,
    slots: &'s [TimeSlot],
    today: Date,
    date: Option<Date>,
    slot: Option<Time>,
    duration: BookingDuration,
    confirmed: bool,
}

impl<'s, 'a> BookingSession<'s, 'a> {
    /// Start a booking for `court` with its daily `slots`.
    ///
    /// `today` is the earliest date that can be chosen.
    pub fn new(court: &'s Court<'a>, slots: &'s [TimeSlot], today: Date) -> Self {
        Self {
            court,
            slots,
            today,
            date: None,
            slot: None,
            duration: BookingDuration::default(),
            confirmed: false,
        }
    }

    /// Current state of the session
    pub fn state(&self) -> SessionState {
        match (self.confirmed, self.date, self.slot) {
            (true, _, _) => SessionState::Confirmed,
            (false, None, None) => SessionState::Empty,
            (false, Some(_), None) => SessionState::DateChosen,
            (false, None, Some(_)) => SessionState::SlotChosen,
            (false, Some(_), Some(_)) => SessionState::Ready,
        }
    }

    /// Court being booked
    pub fn court(&self) -> &'s Court<'a> {
        self.court
    }

    /// Time slots offered for the court
    pub fn slots(&self) -> &'s [TimeSlot] {
        self.slots
    }

    /// Chosen date, if any
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// Start time of the chosen slot, if any
    pub fn selected_slot(&self) -> Option<Time> {
        self.slot
    }

    /// Chosen duration
    pub fn duration(&self) -> BookingDuration {
        self.duration
    }

    /// Choose the booking date.
    ///
    /// A previously chosen time slot is kept: every date offers the same slots.
    ///
    /// # Errors
    ///
    /// - [`SessionError::DateInPast`]: `date` is before the session's first bookable date.
    /// - [`SessionError::AlreadyConfirmed`]: the session is finished.
    pub fn choose_date(&mut self, date: Date) -> Result<SessionState, SessionError> {
        self.ensure_open()?;

        if date < self.today {
            return Err(SessionError::DateInPast {
                date,
                today: self.today,
            });
        }

        self.date = Some(date);

        debug!(court = %self.court.name, %date, "date chosen");

        Ok(self.state())
    }

    /// Select a time slot.
    ///
    /// The slot must be one of the court's own slots, and its availability is
    /// taken from the court's schedule. Refused selections leave the current
    /// selection untouched.
    ///
    /// # Errors
    ///
    /// - [`SessionError::UnknownSlot`]: the court has no slot starting at that time.
    /// - [`SessionError::UnavailableSlotSelected`]: the slot is not available.
    /// - [`SessionError::AlreadyConfirmed`]: the session is finished.
    pub fn select_time_slot(&mut self, slot: &TimeSlot) -> Result<SessionState, SessionError> {
        self.select_start(slot.start())
    }

    /// Select the court's time slot starting at an `HH:MM` time.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Quote`]: `start` is not a valid `HH:MM` time.
    /// - Any error from [`BookingSession::select_time_slot`].
    pub fn select_time(&mut self, start: &str) -> Result<SessionState, SessionError> {
        self.select_start(parse_time(start)?)
    }

    fn select_start(&mut self, start: Time) -> Result<SessionState, SessionError> {
        self.ensure_open()?;

        let slot = find_slot(self.slots, start).ok_or(SessionError::UnknownSlot(start))?;

        if !slot.is_available() {
            debug!(court = %self.court.name, slot = %slot.label(), "ignoring unavailable slot");

            return Err(SessionError::UnavailableSlotSelected(start));
        }

        self.slot = Some(start);

        debug!(court = %self.court.name, slot = %slot.label(), "time slot chosen");

        Ok(self.state())
    }

    /// Choose how long to book the court for.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyConfirmed`] if the session is finished.
    pub fn set_duration(&mut self, duration: BookingDuration) -> Result<SessionState, SessionError> {
        self.ensure_open()?;

        self.duration = duration;

        Ok(self.state())
    }

    /// End time of the chosen slot, once one is chosen
    pub fn end_time(&self) -> Option<EndTime> {
        self.slot.map(|start| end_time(start, self.duration))
    }

    /// Price of the court for the chosen duration.
    ///
    /// Available before any date or slot is chosen.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Quote`] if the total cannot be represented.
    pub fn total_price(&self) -> Result<Money<'a, Currency>, SessionError> {
        compute_total_price(&self.court.price, self.duration)
            .map_err(|err| SessionError::Quote(err.into()))
    }

    /// Price the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Quote`] with [`QuoteError::IncompleteSelection`]
    /// unless both a date and a time slot are chosen.
    pub fn quote(&self) -> Result<BookingQuote<'a>, SessionError> {
        let (date, start) = require_selection(self.date, self.slot)?;

        Ok(BookingQuote::new(self.court, date, start, self.duration)?)
    }

    /// Confirm the booking, finishing the session.
    ///
    /// # Errors
    ///
    /// - [`SessionError::AlreadyConfirmed`]: the session is finished.
    /// - [`SessionError::Quote`]: the selection is incomplete.
    pub fn confirm(&mut self) -> Result<BookingQuote<'a>, SessionError> {
        self.ensure_open()?;

        let quote = self.quote()?;

        self.confirmed = true;

        info!(
            court = %quote.court_name(),
            date = %quote.date(),
            time = %quote.time_range(),
            total = %quote.total(),
            "booking confirmed"
        );

        Ok(quote)
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.confirmed {
            Err(SessionError::AlreadyConfirmed)
        } else {
            Ok(())
        }
    }
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "error formatting receives fields by reference"
)]
fn hhmm(time: &Time) -> String {
    format_time(*time)
}
