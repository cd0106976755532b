//! The seven days of the repeating weekly grid, Sunday first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HuddleError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Canonical week order. Windows are built and tie-broken in this order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts full or three-letter day names in any case ("Monday", "mon").
impl FromStr for Weekday {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<chrono::Weekday>()
            .map(Weekday::from)
            .map_err(|_| HuddleError::InvalidWeekday(s.to_string()))
    }
}

impl TryFrom<String> for Weekday {
    type Error = HuddleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Weekday> for &'static str {
    fn from(day: Weekday) -> Self {
        day.name()
    }
}
