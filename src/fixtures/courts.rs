//! Court Fixtures

use jiff::civil::Date;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    courts::{Court, OpenHours, Review},
    fixtures::FixtureError,
};

/// Wrapper for courts in YAML
#[derive(Debug, Deserialize)]
pub struct CourtsFixture {
    /// Courts, in listing order
    pub courts: Vec<CourtFixture>,
}

/// Court Fixture
#[derive(Debug, Deserialize)]
pub struct CourtFixture {
    /// Key other fixtures refer to the court by
    pub key: String,

    /// Court name
    pub name: String,

    /// Neighbourhood
    pub location: String,

    /// Hourly price (e.g., "25 USD")
    pub price: String,

    /// Average rating out of 5
    pub rating: Decimal,

    /// Distance in kilometres
    pub distance_km: Decimal,

    /// Facilities on site
    #[serde(default)]
    pub amenities: Vec<String>,

    /// Details page description
    #[serde(default)]
    pub description: String,

    /// Opening hours
    #[serde(default)]
    pub open_hours: OpenHours,

    /// House rules
    #[serde(default)]
    pub rules: Vec<String>,

    /// Player reviews
    #[serde(default)]
    pub reviews: Vec<ReviewFixture>,
}

/// Review Fixture
#[derive(Debug, Deserialize)]
pub struct ReviewFixture {
    /// Reviewer's display name
    pub user_name: String,

    /// Stars, 1 to 5
    pub rating: Decimal,

    /// Review text
    pub comment: String,

    /// Day the review was left
    pub date: Date,
}

impl TryFrom<ReviewFixture> for Review {
    type Error = FixtureError;

    fn try_from(fixture: ReviewFixture) -> Result<Self, Self::Error> {
        if !Review::is_valid_rating(fixture.rating) {
            return Err(FixtureError::InvalidReviewRating(fixture.rating));
        }

        Ok(Review {
            user_name: fixture.user_name,
            rating: fixture.rating,
            comment: fixture.comment,
            date: fixture.date,
        })
    }
}

impl TryFrom<CourtFixture> for Court<'_> {
    type Error = FixtureError;

    fn try_from(fixture: CourtFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        let reviews = fixture
            .reviews
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Court {
            name: fixture.name,
            location: fixture.location,
            price: Money::from_minor(minor_units, currency),
            rating: fixture.rating,
            distance_km: fixture.distance_km,
            amenities: fixture.amenities.into_iter().collect(),
            description: fixture.description,
            open_hours: fixture.open_hours,
            rules: fixture.rules,
            reviews,
        })
    }
}

/// Parse price string (e.g., "27.50 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal with at most the currency's number of
/// minor digits, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let scaled = amount
        .checked_mul(Decimal::from(10_i64.pow(currency.exponent)))
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    if !scaled.fract().is_zero() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = scaled
        .to_i64()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_reads_whole_and_fractional_amounts() -> Result<(), FixtureError> {
        let (whole, usd) = parse_price("25 USD")?;
        let (fractional, eur) = parse_price("27.50 EUR")?;

        assert_eq!(whole, 2500);
        assert_eq!(usd, USD);
        assert_eq!(fractional, 2750);
        assert_eq!(eur, EUR);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("25USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("25 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_sub_minor_amounts() {
        let result = parse_price("25.005 GBP");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn court_fixture_converts_to_court() -> Result<(), FixtureError> {
        let fixture = CourtFixture {
            key: "padel-arena-pro".to_string(),
            name: "Padel Arena Pro".to_string(),
            location: "West Side".to_string(),
            price: "20 USD".to_string(),
            rating: Decimal::new(43, 1),
            distance_km: Decimal::new(21, 1),
            amenities: vec!["Parking".to_string(), "Shower".to_string()],
            description: String::new(),
            open_hours: OpenHours::default(),
            rules: Vec::new(),
            reviews: vec![ReviewFixture {
                user_name: "Mike R.".to_string(),
                rating: Decimal::new(4, 0),
                comment: "Good court.".to_string(),
                date: jiff::civil::date(2024, 1, 18),
            }],
        };

        let court = Court::try_from(fixture)?;

        assert_eq!(court.price, Money::from_minor(2000, USD));
        assert_eq!(court.amenities.len(), 2);
        assert_eq!(court.reviews.first().map(|review| review.rating), Some(Decimal::new(4, 0)));

        Ok(())
    }

    #[test]
    fn review_ratings_outside_one_to_five_are_rejected() {
        let review = ReviewFixture {
            user_name: "Sarah M.".to_string(),
            rating: Decimal::new(6, 0),
            comment: "Too good.".to_string(),
            date: jiff::civil::date(2024, 1, 20),
        };

        assert!(matches!(
            Review::try_from(review),
            Err(FixtureError::InvalidReviewRating(rating)) if rating == Decimal::new(6, 0)
        ));
    }
}
