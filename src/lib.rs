//! Padel
//!
//! Padel is the booking core of a padel court app: a court catalogue with
//! search filters, booking quotes with end time and price, the booking
//! session state machine, and a player's bookings list.

pub mod bookings;
pub mod courts;
pub mod durations;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod quote;
pub mod search;
pub mod session;
pub mod slots;
pub mod summary;
