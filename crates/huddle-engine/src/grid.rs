//! Per-participant weekly availability.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::slot::TimeSlot;
use crate::weekday::Weekday;
use crate::wire::WireParticipant;

/// Which slots a participant is free for, keyed by day.
///
/// Days that were never given any slots read as empty. Slots are kept in a
/// set, so duplicates in the input collapse and iteration is ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityGrid {
    days: BTreeMap<Weekday, BTreeSet<TimeSlot>>,
}

impl AvailabilityGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`AvailabilityGrid::insert`] for a whole day.
    pub fn with_slots(mut self, day: Weekday, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.days.entry(day).or_default().extend(slots);
        self
    }

    /// Mark `slot` on `day` as available. Returns false if it already was.
    pub fn insert(&mut self, day: Weekday, slot: TimeSlot) -> bool {
        self.days.entry(day).or_default().insert(slot)
    }

    pub fn is_available(&self, day: Weekday, slot: TimeSlot) -> bool {
        self.days.get(&day).is_some_and(|slots| slots.contains(&slot))
    }

    /// Available slots on `day`, ascending.
    pub fn slots(&self, day: Weekday) -> impl Iterator<Item = TimeSlot> + '_ {
        self.days.get(&day).into_iter().flatten().copied()
    }

    /// Total number of available slots across the week.
    pub fn slot_count(&self) -> usize {
        self.days.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_count() == 0
    }
}

impl FromIterator<(Weekday, TimeSlot)> for AvailabilityGrid {
    fn from_iter<I: IntoIterator<Item = (Weekday, TimeSlot)>>(iter: I) -> Self {
        let mut grid = AvailabilityGrid::new();
        for (day, slot) in iter {
            grid.insert(day, slot);
        }
        grid
    }
}

/// A named member of a room together with their weekly grid.
///
/// The name is only used for display; aggregation tells participants apart
/// by their position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireParticipant")]
pub struct Participant {
    pub name: String,
    pub availability: AvailabilityGrid,
}

impl Participant {
    pub fn new(name: impl Into<String>, availability: AvailabilityGrid) -> Self {
        Self {
            name: name.into(),
            availability,
        }
    }
}
