//! Time Slots

use jiff::civil::Time;

use crate::quote::QuoteError;

/// A bookable start time on a court's daily schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    start: Time,
    available: bool,
}

impl TimeSlot {
    /// Creates a new time slot
    pub fn new(start: Time, available: bool) -> Self {
        Self { start, available }
    }

    /// Creates a time slot from an `HH:MM` start time
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidTimeFormat`] if `start` is not a valid `HH:MM` time.
    pub fn parse(start: &str, available: bool) -> Result<Self, QuoteError> {
        Ok(Self::new(parse_time(start)?, available))
    }

    /// Start time of the slot
    pub fn start(&self) -> Time {
        self.start
    }

    /// Whether the slot can be selected
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Start time formatted as `HH:MM`
    pub fn label(&self) -> String {
        format_time(self.start)
    }
}

/// Parses a 24-hour `HH:MM` time.
///
/// Both components must be exactly two digits, with hours in `00..=23` and
/// minutes in `00..=59`.
///
/// # Errors
///
/// Returns [`QuoteError::InvalidTimeFormat`] for anything else.
pub fn parse_time(s: &str) -> Result<Time, QuoteError> {
    let invalid = || QuoteError::InvalidTimeFormat(s.to_string());

    let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;

    let hour = parse_component(hours).ok_or_else(invalid)?;
    let minute = parse_component(minutes).ok_or_else(invalid)?;

    Time::new(hour, minute, 0, 0).map_err(|_err| invalid())
}

fn parse_component(component: &str) -> Option<i8> {
    if component.len() != 2 || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    component.parse().ok()
}

/// Formats a time as zero-padded `HH:MM`.
pub fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Finds the slot starting at `start`.
pub fn find_slot(slots: &[TimeSlot], start: Time) -> Option<&TimeSlot> {
    slots.iter().find(|slot| slot.start == start)
}

/// Finds the first available slot starting at or after `after`.
///
/// Slots are searched in schedule order.
pub fn next_available(slots: &[TimeSlot], after: Time) -> Option<&TimeSlot> {
    slots
        .iter()
        .find(|slot| slot.available && slot.start >= after)
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_time_accepts_valid_times() -> TestResult {
        assert_eq!(parse_time("00:00")?, time(0, 0, 0, 0));
        assert_eq!(parse_time("14:30")?, time(14, 30, 0, 0));
        assert_eq!(parse_time("23:59")?, time(23, 59, 0, 0));

        Ok(())
    }

    #[test]
    fn parse_time_rejects_malformed_input() {
        for input in ["", "14", "14:0", "4:00", "14:000", "1a:00", "14-00", "+1:00", " 14:00"] {
            assert!(
                matches!(parse_time(input), Err(QuoteError::InvalidTimeFormat(ref s)) if s == input),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn parse_time_rejects_out_of_range_components() {
        assert!(matches!(parse_time("24:00"), Err(QuoteError::InvalidTimeFormat(_))));
        assert!(matches!(parse_time("12:60"), Err(QuoteError::InvalidTimeFormat(_))));
    }

    #[test]
    fn label_is_zero_padded() -> TestResult {
        let slot = TimeSlot::parse("08:00", true)?;

        assert_eq!(slot.label(), "08:00");
        assert!(slot.is_available());

        Ok(())
    }

    #[test]
    fn find_slot_matches_start_time() -> TestResult {
        let slots = [
            TimeSlot::parse("08:00", true)?,
            TimeSlot::parse("09:00", false)?,
        ];

        let found = find_slot(&slots, time(9, 0, 0, 0));

        assert_eq!(found.map(TimeSlot::is_available), Some(false));
        assert_eq!(find_slot(&slots, time(10, 0, 0, 0)), None);

        Ok(())
    }

    #[test]
    fn next_available_skips_unavailable_slots() -> TestResult {
        let slots = [
            TimeSlot::parse("09:00", true)?,
            TimeSlot::parse("10:00", false)?,
            TimeSlot::parse("11:00", true)?,
            TimeSlot::parse("13:00", false)?,
            TimeSlot::parse("14:00", true)?,
        ];

        let start = |slot: Option<&TimeSlot>| slot.map(TimeSlot::start);

        assert_eq!(start(next_available(&slots, time(9, 30, 0, 0))), Some(time(11, 0, 0, 0)));
        assert_eq!(start(next_available(&slots, time(12, 0, 0, 0))), Some(time(14, 0, 0, 0)));
        assert_eq!(start(next_available(&slots, time(14, 0, 0, 0))), Some(time(14, 0, 0, 0)));
        assert_eq!(next_available(&slots, time(14, 1, 0, 0)), None);

        Ok(())
    }
}
