//! CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;

use padel::{
    bookings::BookingTab,
    durations::BookingDuration,
    search::{DistanceFilter, PriceRange, RatingFilter, SearchFilters},
};

/// Padel court booking
#[derive(Debug, Parser)]
#[command(name = "padel", about = "Browse and book padel courts", long_about = None)]
pub struct Config {
    /// Directory holding the fixture sets
    #[arg(long, env = "PADEL_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Fixture set to load
    #[arg(short, long, env = "PADEL_SET", default_value = "default")]
    pub set: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the court catalogue
    Courts(CourtsArgs),

    /// Show a court's details and reviews
    Court(CourtArgs),

    /// Price a booking, optionally confirming it
    Quote(QuoteArgs),

    /// List bookings
    Bookings(BookingsArgs),
}

/// Arguments for `padel courts`
#[derive(Debug, Args)]
pub struct CourtsArgs {
    /// Text to match against court name or location
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Price range: all, under20, 20-30, over30
    #[arg(long, default_value = "all")]
    pub price_range: PriceRange,

    /// Minimum rating: all, 4plus, 4.5plus
    #[arg(long, default_value = "all")]
    pub rating: RatingFilter,

    /// Maximum distance: all, 1km, 5km
    #[arg(long, default_value = "all")]
    pub distance: DistanceFilter,
}

impl From<CourtsArgs> for SearchFilters {
    fn from(args: CourtsArgs) -> Self {
        Self {
            query: args.query,
            price_range: args.price_range,
            rating: args.rating,
            distance: args.distance,
        }
    }
}

/// Arguments for `padel court`
#[derive(Debug, Args)]
pub struct CourtArgs {
    /// Court key
    pub court: String,
}

/// Arguments for `padel quote`
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Court key
    #[arg(short, long)]
    pub court: String,

    /// Date to play (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Date,

    /// Start time (HH:MM)
    #[arg(short, long)]
    pub time: String,

    /// Length in hours: 1, 1.5 or 2
    #[arg(long, default_value = "1")]
    pub duration: BookingDuration,

    /// Confirm the booking instead of only pricing it
    #[arg(long)]
    pub confirm: bool,
}

/// Arguments for `padel bookings`
#[derive(Debug, Args)]
pub struct BookingsArgs {
    /// Tab to show: upcoming or past
    #[arg(long, default_value = "upcoming")]
    pub tab: BookingTab,
}
