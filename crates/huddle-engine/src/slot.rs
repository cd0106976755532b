//! Hour slots and their 12-hour display labels.
//!
//! The grid has 24 one-hour slots per day. A slot is stored as its starting
//! hour (0-23); the `"H:MM AM|PM"` label is only a view over that integer and
//! is also the form in which slots travel over the wire.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{HuddleError, Result};

/// Number of slots in one day of the grid.
pub const HOURS_PER_DAY: u8 = 24;

const LABEL_FORMAT: &str = "%-I:%M %p";
const LABEL_PARSE_FORMAT: &str = "%I:%M %p";

/// A one-hour slot `[hour, hour + 1)` on the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Build a slot from an hour index.
    ///
    /// # Errors
    /// Returns `HuddleError::InvalidHour` when `hour` is 24 or more.
    pub fn new(hour: u8) -> Result<Self> {
        if hour < HOURS_PER_DAY {
            Ok(TimeSlot(hour))
        } else {
            Err(HuddleError::InvalidHour(hour))
        }
    }

    /// The starting hour, 0-23.
    pub fn hour(self) -> u8 {
        self.0
    }

    /// The hour at which this slot ends, 1-24.
    pub fn end_hour(self) -> u8 {
        self.0 + 1
    }

    /// All 24 slots of a day in ascending order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..HOURS_PER_DAY).map(TimeSlot)
    }

    /// Parse a `"H:MM AM|PM"` label such as `"9:00 AM"` or `"12:00 PM"`.
    ///
    /// H is 1-12 (a leading zero is accepted). Minutes must be `00` since
    /// slots start on the hour.
    ///
    /// # Errors
    /// Returns `HuddleError::InvalidTimeLabel` for anything outside that grammar.
    pub fn parse_label(label: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(label.trim(), LABEL_PARSE_FORMAT).map_err(|e| {
            HuddleError::InvalidTimeLabel {
                label: label.to_string(),
                reason: e.to_string(),
            }
        })?;

        if time.minute() != 0 {
            return Err(HuddleError::InvalidTimeLabel {
                label: label.to_string(),
                reason: "slots start on the hour".to_string(),
            });
        }

        // NaiveTime::hour() is always 0-23.
        Ok(TimeSlot(time.hour() as u8))
    }

    /// The display label, e.g. `"1:00 PM"`.
    pub fn label(self) -> String {
        format_hour(self.0)
    }
}

/// Render an hour as a 12-hour label.
///
/// Accepts 0-24: hour 24 is the end of the 11 PM slot and renders as
/// `"12:00 AM"` (midnight). Larger values wrap modulo 24.
///
/// The 24 case deliberately reads `"12:00 AM"`, not the `"12:00 PM"` some
/// schedule displays show for end of day: a range ending at midnight is
/// `"11:00 PM - 12:00 AM"`.
pub fn format_hour(hour: u8) -> String {
    NaiveTime::from_hms_opt(u32::from(hour % HOURS_PER_DAY), 0, 0)
        .unwrap_or(NaiveTime::MIN)
        .format(LABEL_FORMAT)
        .to_string()
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self> {
        TimeSlot::parse_label(s)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = HuddleError;

    fn try_from(value: String) -> Result<Self> {
        TimeSlot::parse_label(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(label: &str) -> u8 {
        TimeSlot::parse_label(label).unwrap().hour()
    }

    #[test]
    fn midnight_and_noon_boundaries() {
        assert_eq!(parse("12:00 AM"), 0);
        assert_eq!(parse("12:00 PM"), 12);
        assert_eq!(parse("11:00 PM"), 23);
        assert_eq!(parse("1:00 AM"), 1);
        assert_eq!(parse("1:00 PM"), 13);
    }

    #[test]
    fn formats_boundaries() {
        assert_eq!(format_hour(0), "12:00 AM");
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(23), "11:00 PM");
        assert_eq!(format_hour(9), "9:00 AM");
    }

    #[test]
    fn end_of_day_formats_as_midnight() {
        assert_eq!(format_hour(24), "12:00 AM");
        assert_ne!(format_hour(24), format_hour(12));
    }

    #[test]
    fn every_label_parses_back_to_its_hour() {
        for slot in TimeSlot::all() {
            assert_eq!(TimeSlot::parse_label(&slot.label()).unwrap(), slot);
        }
    }

    #[test]
    fn leading_zero_is_accepted() {
        assert_eq!(parse("09:00 AM"), 9);
    }

    #[test]
    fn rejects_malformed_labels() {
        for bad in ["", "9:00", "13:00 PM", "0:00 AM", "noon", "9:30 AM", "9:00 XM"] {
            assert!(
                matches!(
                    TimeSlot::parse_label(bad),
                    Err(HuddleError::InvalidTimeLabel { .. })
                ),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn new_rejects_hour_24() {
        assert!(TimeSlot::new(23).is_ok());
        assert!(matches!(TimeSlot::new(24), Err(HuddleError::InvalidHour(24))));
    }

    #[test]
    fn serde_uses_label() {
        let slot = TimeSlot::new(15).unwrap();
        assert_eq!(serde_json::to_string(&slot).unwrap(), "\"3:00 PM\"");
        let back: TimeSlot = serde_json::from_str("\"3:00 PM\"").unwrap();
        assert_eq!(back, slot);
    }
}
