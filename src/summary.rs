//! Summaries
//!
//! Terminal tables for quotes, court listings and bookings.

use std::io;

use jiff::civil::Time;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    bookings::{Booking, BookingKey},
    courts::Court,
    quote::BookingQuote,
    slots::{TimeSlot, next_available},
};

/// Errors that can occur when writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Writing to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write the booking summary for a quote.
///
/// # Errors
///
/// Returns [`SummaryError::Io`] if writing fails.
pub fn write_quote(mut out: impl io::Write, quote: &BookingQuote<'_>) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["Booking Summary".to_string(), String::new()]);
    builder.push_record(["Court".to_string(), quote.court_name().to_string()]);
    builder.push_record(["Location".to_string(), quote.location().to_string()]);
    builder.push_record(["Date".to_string(), quote.date().to_string()]);
    builder.push_record(["Time".to_string(), quote.time_range()]);
    builder.push_record([
        "Duration".to_string(),
        format!("{} hour(s)", quote.duration()),
    ]);
    builder.push_record(["Total".to_string(), quote.total().to_string()]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write a listing of courts with their hourly prices and the first slot
/// still open at or after `after`.
///
/// # Errors
///
/// Returns [`SummaryError::Io`] if writing fails.
pub fn write_courts(
    mut out: impl io::Write,
    courts: &[(&str, &Court<'_>)],
    slots: &[TimeSlot],
    after: Time,
) -> Result<(), SummaryError> {
    if courts.is_empty() {
        writeln!(out, "No courts match your search.")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record([
        "Key",
        "Court",
        "Location",
        "Rating",
        "Distance",
        "Price/hour",
        "Next",
    ]);

    let next = next_available(slots, after).map_or_else(|| "-".to_string(), TimeSlot::label);

    for (key, court) in courts {
        builder.push_record([
            (*key).to_string(),
            court.name.clone(),
            court.location.clone(),
            court.rating.normalize().to_string(),
            format!("{} km", court.distance_km.normalize()),
            court.price.to_string(),
            next.clone(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the details page for a single court: facts, opening hours, rules
/// and reviews.
///
/// # Errors
///
/// Returns [`SummaryError::Io`] if writing fails.
pub fn write_court_details(mut out: impl io::Write, court: &Court<'_>) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record([court.name.clone(), String::new()]);
    builder.push_record(["Location".to_string(), court.location.clone()]);
    builder.push_record(["Rating".to_string(), court.rating.normalize().to_string()]);
    builder.push_record(["Price/hour".to_string(), court.price.to_string()]);
    builder.push_record(["Weekdays".to_string(), court.open_hours.weekdays.clone()]);
    builder.push_record(["Weekends".to_string(), court.open_hours.weekends.clone()]);
    builder.push_record(["Amenities".to_string(), court.amenities.join(", ")]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    writeln!(out, "{table}")?;

    if !court.description.is_empty() {
        writeln!(out, "\n{}", court.description)?;
    }

    if !court.rules.is_empty() {
        writeln!(out, "\nRules:")?;

        for rule in &court.rules {
            writeln!(out, "  - {rule}")?;
        }
    }

    if court.reviews.is_empty() {
        writeln!(out, "\nNo reviews yet.")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Reviewer", "Rating", "Date", "Comment"]);

    for review in &court.reviews {
        builder.push_record([
            review.user_name.clone(),
            review.rating.normalize().to_string(),
            review.date.to_string(),
            review.comment.clone(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..2), Alignment::right());

    writeln!(out, "\n{table}")?;

    Ok(())
}

/// Write a list of bookings.
///
/// # Errors
///
/// Returns [`SummaryError::Io`] if writing fails.
pub fn write_bookings(
    mut out: impl io::Write,
    bookings: &[(BookingKey, &Booking<'_>)],
) -> Result<(), SummaryError> {
    if bookings.is_empty() {
        writeln!(out, "No bookings.")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Court", "Location", "Date", "Time", "Price", "Status"]);

    for (_, booking) in bookings {
        let status = if booking.can_review {
            format!("{} (review)", booking.status)
        } else {
            booking.status.to_string()
        };

        builder.push_record([
            booking.court_name.clone(),
            booking.location.clone(),
            booking.date.to_string(),
            booking.time_range(),
            booking.price.to_string(),
            status,
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(4..5), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}
