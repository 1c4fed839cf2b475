//! Fixtures
//!
//! YAML data sets standing in for a booking backend. A set named `default`
//! lives in `courts/default.yml`, `slots/default.yml` and
//! `bookings/default.yml` under the fixture base path.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    bookings::{Booking, Bookings},
    courts::{Catalogue, CatalogueError, Court},
    durations::BookingDuration,
    fixtures::{bookings::BookingsFixture, courts::CourtsFixture, slots::SlotsFixture},
    pricing::{TotalPriceError, compute_total_price},
    quote::{QuoteError, end_time},
    slots::{TimeSlot, parse_time},
};

pub mod bookings;
pub mod courts;
pub mod slots;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,

        /// Underlying IO error
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Review rating outside 1 to 5
    #[error("Invalid review rating: {0}")]
    InvalidReviewRating(rust_decimal::Decimal),

    /// Currency mismatch between courts
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Invalid time or duration
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Court lookup or registration failed
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// Booking price could not be calculated
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    catalogue: Catalogue<'a>,
    slots: Vec<TimeSlot>,
    bookings: Bookings<'a>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalogue: Catalogue::new(),
            slots: Vec::new(),
            bookings: Bookings::new(),
            currency: None,
        }
    }

    fn read(&self, kind: &str, name: &str) -> Result<String, FixtureError> {
        let path = self.base_path.join(kind).join(format!("{name}.yml"));

        fs::read_to_string(&path).map_err(|source| FixtureError::Io { path, source })
    }

    /// Load courts from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a price is
    /// malformed, or if courts are priced in different currencies.
    pub fn load_courts(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CourtsFixture = serde_norway::from_str(&self.read("courts", name)?)?;

        for court_fixture in fixture.courts {
            let (_minor_units, currency) = courts::parse_price(&court_fixture.price)?;

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let key = court_fixture.key.clone();
            let court: Court<'a> = court_fixture.try_into()?;

            self.catalogue.insert(key, court)?;
        }

        Ok(self)
    }

    /// Load the daily time slots from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a time is not `HH:MM`.
    pub fn load_slots(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: SlotsFixture = serde_norway::from_str(&self.read("slots", name)?)?;

        for slot in fixture.slots {
            self.slots.push(TimeSlot::parse(&slot.time, slot.available)?);
        }

        Ok(self)
    }

    /// Load bookings from a YAML fixture file
    ///
    /// Courts must be loaded first; each booking is priced from its court.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a booking
    /// references an unknown court or has an invalid time or duration.
    pub fn load_bookings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: BookingsFixture = serde_norway::from_str(&self.read("bookings", name)?)?;

        for booking in fixture.bookings {
            let court = self.catalogue.get(&booking.court)?;
            let start = parse_time(&booking.time)?;
            let duration = BookingDuration::try_from(booking.duration)?;

            let booking = Booking {
                court_name: court.name.clone(),
                location: court.location.clone(),
                date: booking.date,
                start,
                end: end_time(start, duration),
                price: compute_total_price(&court.price, duration)?,
                status: booking.status,
                can_review: booking.can_review,
            };

            self.bookings.insert(booking);
        }

        Ok(self)
    }

    /// Load a complete fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load a complete fixture set (courts, slots and bookings with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl AsRef<Path>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path.as_ref());

        fixture
            .load_courts(name)?
            .load_slots(name)?
            .load_bookings(name)?;

        Ok(fixture)
    }

    /// Get a court by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the court is not found.
    pub fn court(&self, key: &str) -> Result<&Court<'a>, FixtureError> {
        Ok(self.catalogue.get(key)?)
    }

    /// All loaded courts
    pub fn catalogue(&self) -> &Catalogue<'a> {
        &self.catalogue
    }

    /// Daily time slots
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Loaded bookings
    pub fn bookings(&self) -> &Bookings<'a> {
        &self.bookings
    }

    /// Loaded bookings, for recording new ones
    pub fn bookings_mut(&mut self) -> &mut Bookings<'a> {
        &mut self.bookings
    }

    /// Currency the courts are priced in, once courts are loaded
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }
}
