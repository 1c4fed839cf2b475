//! Courts

use jiff::civil::Date;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use thiserror::Error;

new_key_type! {
    /// Court Key
    pub struct CourtKey;
}

/// Court
#[derive(Debug, Clone)]
pub struct Court<'a> {
    /// Court name
    pub name: String,

    /// Neighbourhood the court is in
    pub location: String,

    /// Price per hour
    pub price: Money<'a, Currency>,

    /// Average review rating, out of 5
    pub rating: Decimal,

    /// Distance from the player, in kilometres
    pub distance_km: Decimal,

    /// Facilities on site
    pub amenities: SmallVec<[String; 4]>,

    /// Free-text description shown on the details page
    pub description: String,

    /// Opening hours
    pub open_hours: OpenHours,

    /// House rules
    pub rules: Vec<String>,

    /// Player reviews, newest first
    pub reviews: Vec<Review>,
}

/// Opening hours, as displayed (e.g., "6:00 AM - 11:00 PM").
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OpenHours {
    /// Monday to Friday
    pub weekdays: String,

    /// Saturday and Sunday
    pub weekends: String,
}

/// A player's review of a court.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Display name of the reviewer
    pub user_name: String,

    /// Stars given, from 1 to 5
    pub rating: Decimal,

    /// Review text
    pub comment: String,

    /// Day the review was left
    pub date: Date,
}

impl Review {
    /// Lowest rating a review can give.
    pub const MIN_RATING: Decimal = Decimal::ONE;

    /// Highest rating a review can give.
    pub const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Whether `rating` is a valid review rating.
    pub fn is_valid_rating(rating: Decimal) -> bool {
        (Self::MIN_RATING..=Self::MAX_RATING).contains(&rating)
    }
}

/// Catalogue errors
#[derive(Debug, Error, PartialEq)]
pub enum CatalogueError {
    /// No court is registered under the key.
    #[error("Court not found: {0}")]
    CourtNotFound(String),

    /// A court is already registered under the key.
    #[error("Duplicate court: {0}")]
    DuplicateCourt(String),
}

/// The courts available for booking, addressable by a stable string key.
#[derive(Debug, Default)]
pub struct Catalogue<'a> {
    courts: SlotMap<CourtKey, Court<'a>>,
    keys: FxHashMap<String, CourtKey>,
    order: Vec<(String, CourtKey)>,
}

impl<'a> Catalogue<'a> {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a court under `key`
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::DuplicateCourt`] if `key` is already taken.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        court: Court<'a>,
    ) -> Result<CourtKey, CatalogueError> {
        let key = key.into();

        if self.keys.contains_key(&key) {
            return Err(CatalogueError::DuplicateCourt(key));
        }

        let court_key = self.courts.insert(court);

        self.keys.insert(key.clone(), court_key);
        self.order.push((key, court_key));

        Ok(court_key)
    }

    /// Get a court by its string key
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::CourtNotFound`] if there is no such court.
    pub fn get(&self, key: &str) -> Result<&Court<'a>, CatalogueError> {
        self.keys
            .get(key)
            .and_then(|court_key| self.courts.get(*court_key))
            .ok_or_else(|| CatalogueError::CourtNotFound(key.to_string()))
    }

    /// Iterate over `(key, court)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Court<'a>)> {
        self.order.iter().filter_map(|(key, court_key)| {
            self.courts
                .get(*court_key)
                .map(|court| (key.as_str(), court))
        })
    }

    /// Number of courts
    pub fn len(&self) -> usize {
        self.courts.len()
    }

    /// Whether the catalogue has no courts
    pub fn is_empty(&self) -> bool {
        self.courts.is_empty()
    }
}
