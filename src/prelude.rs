//! Padel prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    bookings::{Booking, BookingError, BookingKey, BookingStatus, BookingTab, Bookings},
    courts::{Catalogue, CatalogueError, Court, CourtKey, OpenHours, Review},
    durations::BookingDuration,
    fixtures::{Fixture, FixtureError},
    pricing::{TotalPriceError, compute_total_price},
    quote::{BookingQuote, EndTime, QuoteError, compute_end_time, end_time, validate_selection},
    search::{DistanceFilter, PriceRange, RatingFilter, SearchError, SearchFilters},
    session::{BookingSession, SessionError, SessionState},
    slots::{TimeSlot, next_available, parse_time},
    summary::{SummaryError, write_bookings, write_court_details, write_courts, write_quote},
};
