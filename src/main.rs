//! Padel CLI

use std::{io, process};

use jiff::Zoned;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use padel::{
    fixtures::{Fixture, FixtureError},
    search::SearchFilters,
    session::{BookingSession, SessionError},
    summary::{SummaryError, write_bookings, write_court_details, write_courts, write_quote},
};

use crate::config::{BookingsArgs, Command, Config, CourtArgs, QuoteArgs};

mod config;

/// Errors reported by the CLI.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Padel CLI entry point
pub fn main() {
    let config = Config::load().unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    if let Err(err) = run(config) {
        error!("{err}");

        process::exit(1);
    }
}

fn run(config: Config) -> Result<(), CliError> {
    let mut fixture = Fixture::from_set_in(&config.fixtures, &config.set)?;

    debug!(
        set = %config.set,
        courts = fixture.catalogue().len(),
        slots = fixture.slots().len(),
        bookings = fixture.bookings().len(),
        "fixtures loaded"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match config.command {
        Command::Courts(args) => {
            let filters = SearchFilters::from(args);

            write_courts(
                &mut handle,
                &fixture.catalogue().search(&filters),
                fixture.slots(),
                Zoned::now().time(),
            )?;
        }
        Command::Court(CourtArgs { court }) => {
            write_court_details(&mut handle, fixture.court(&court)?)?;
        }
        Command::Quote(args) => quote(&mut fixture, &args, &mut handle)?,
        Command::Bookings(BookingsArgs { tab }) => {
            write_bookings(&mut handle, &fixture.bookings().tab(tab))?;
        }
    }

    Ok(())
}

fn quote(
    fixture: &mut Fixture<'_>,
    args: &QuoteArgs,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let today = Zoned::now().date();
    let court = fixture.court(&args.court)?;

    let mut session = BookingSession::new(court, fixture.slots(), today);

    session.choose_date(args.date)?;
    session.select_time(&args.time)?;
    session.set_duration(args.duration)?;

    if !args.confirm {
        write_quote(out, &session.quote()?)?;

        return Ok(());
    }

    let quote = session.confirm()?;

    writeln!(out, "{quote}\n\nBooking confirmed!")?;

    fixture.bookings_mut().record(quote);

    write_bookings(out, &fixture.bookings().upcoming())?;

    Ok(())
}
