//! Court Search

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    courts::{Catalogue, Court},
    pricing::major_units,
};

/// Search errors
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    /// A filter value was not one of the offered options.
    #[error("Unknown {filter} filter: {value}")]
    UnknownFilter {
        /// Which filter was being parsed
        filter: &'static str,

        /// The rejected value
        value: String,
    },
}

fn unknown(filter: &'static str, value: &str) -> SearchError {
    SearchError::UnknownFilter {
        filter,
        value: value.to_string(),
    }
}

/// Hourly price bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceRange {
    /// Any price
    #[default]
    All,

    /// Strictly under 20
    Under20,

    /// 20 to 30 inclusive
    Between20And30,

    /// Strictly over 30
    Over30,
}

impl PriceRange {
    /// Whether an hourly price, in major units, falls in the band
    pub fn contains(self, price: Decimal) -> bool {
        let twenty = Decimal::new(20, 0);
        let thirty = Decimal::new(30, 0);

        match self {
            Self::All => true,
            Self::Under20 => price < twenty,
            Self::Between20And30 => price >= twenty && price <= thirty,
            Self::Over30 => price > thirty,
        }
    }
}

impl FromStr for PriceRange {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "under20" => Ok(Self::Under20),
            "20-30" => Ok(Self::Between20And30),
            "over30" => Ok(Self::Over30),
            other => Err(unknown("price range", other)),
        }
    }
}

/// Minimum rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingFilter {
    /// Any rating
    #[default]
    All,

    /// 4 stars and up
    FourPlus,

    /// 4.5 stars and up
    FourAndHalfPlus,
}

impl RatingFilter {
    /// Whether a rating passes the filter
    pub fn accepts(self, rating: Decimal) -> bool {
        match self {
            Self::All => true,
            Self::FourPlus => rating >= Decimal::new(4, 0),
            Self::FourAndHalfPlus => rating >= Decimal::new(45, 1),
        }
    }
}

impl FromStr for RatingFilter {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "4plus" => Ok(Self::FourPlus),
            "4.5plus" => Ok(Self::FourAndHalfPlus),
            other => Err(unknown("rating", other)),
        }
    }
}

/// Maximum distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceFilter {
    /// Any distance
    #[default]
    All,

    /// Within 1 km
    Within1Km,

    /// Within 5 km
    Within5Km,
}

impl DistanceFilter {
    /// Whether a distance in kilometres passes the filter
    pub fn accepts(self, distance_km: Decimal) -> bool {
        match self {
            Self::All => true,
            Self::Within1Km => distance_km <= Decimal::ONE,
            Self::Within5Km => distance_km <= Decimal::new(5, 0),
        }
    }
}

impl FromStr for DistanceFilter {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "1km" => Ok(Self::Within1Km),
            "5km" => Ok(Self::Within5Km),
            other => Err(unknown("distance", other)),
        }
    }
}

/// Court search criteria. The default matches every court.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Case-insensitive text matched against court name and location
    pub query: String,

    /// Hourly price band
    pub price_range: PriceRange,

    /// Minimum rating
    pub rating: RatingFilter,

    /// Maximum distance
    pub distance: DistanceFilter,
}

impl SearchFilters {
    /// Whether `court` satisfies every filter
    pub fn matches(&self, court: &Court<'_>) -> bool {
        self.matches_query(court)
            && self.price_range.contains(major_units(&court.price))
            && self.rating.accepts(court.rating)
            && self.distance.accepts(court.distance_km)
    }

    fn matches_query(&self, court: &Court<'_>) -> bool {
        let query = self.query.trim().to_lowercase();

        query.is_empty()
            || court.name.to_lowercase().contains(&query)
            || court.location.to_lowercase().contains(&query)
    }
}

impl<'a> Catalogue<'a> {
    /// Courts matching `filters`, in catalogue order
    pub fn search(&self, filters: &SearchFilters) -> Vec<(&str, &Court<'a>)> {
        self.iter()
            .filter(|(_, court)| filters.matches(court))
            .collect()
    }
}
