//! Time Slot Fixtures

use serde::Deserialize;

/// Wrapper for time slots in YAML
#[derive(Debug, Deserialize)]
pub struct SlotsFixture {
    /// Daily slots, earliest first
    pub slots: Vec<SlotFixture>,
}

/// Time Slot Fixture
#[derive(Debug, Deserialize)]
pub struct SlotFixture {
    /// Start time (e.g., "14:00")
    pub time: String,

    /// Whether the slot can be booked
    #[serde(default = "available")]
    pub available: bool,
}

fn available() -> bool {
    true
}
