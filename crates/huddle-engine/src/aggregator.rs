//! Turn per-participant weekly grids into ranked meeting windows.
//!
//! For each day (Sunday first) every slot that at least two participants
//! share becomes a candidate. Candidates are walked in ascending hour order
//! and merged into a window while they stay back-to-back and the set of
//! available participants stays exactly the same. Windows from all days are
//! then ranked by how many people can attend.
//!
//! Aggregation is pure: it borrows the participants, keeps no state between
//! calls, and cannot fail.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::grid::Participant;
use crate::slot::{format_hour, TimeSlot};
use crate::weekday::Weekday;

/// Fewest attendees that make a slot a meeting candidate.
pub const MIN_ATTENDEES: usize = 2;

/// A maximal run of consecutive slots on one day with an unchanging set of
/// available participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingWindow {
    pub day: Weekday,
    /// First slot of the run.
    pub start: TimeSlot,
    /// Exclusive end hour, 1-24: one past the last slot's starting hour.
    pub end_hour: u8,
    /// Names of everyone free for the whole window, in input order.
    pub participants: Vec<String>,
}

impl MeetingWindow {
    pub fn available_count(&self) -> usize {
        self.participants.len()
    }

    pub fn start_hour(&self) -> u8 {
        self.start.hour()
    }

    pub fn duration_hours(&self) -> u8 {
        self.end_hour - self.start.hour()
    }

    /// `"9:00 AM - 11:00 AM"`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start, format_hour(self.end_hour))
    }

    /// True when `slot` falls inside `[start, end_hour)`.
    pub fn covers(&self, slot: TimeSlot) -> bool {
        slot >= self.start && slot.hour() < self.end_hour
    }

    /// Whether every one of `total` participants can attend.
    pub fn is_full_attendance(&self, total: usize) -> bool {
        self.available_count() == total
    }
}

/// A window still being extended. Attendees are participant positions in
/// ascending order, so comparing the vectors compares the sets.
struct OpenWindow {
    start: TimeSlot,
    last: TimeSlot,
    attendees: Vec<usize>,
}

impl OpenWindow {
    fn extends_with(&self, slot: TimeSlot, attendees: &[usize]) -> bool {
        self.last.end_hour() == slot.hour() && self.attendees == attendees
    }

    fn close(self, day: Weekday, participants: &[Participant]) -> MeetingWindow {
        let window = MeetingWindow {
            day,
            start: self.start,
            end_hour: self.last.end_hour(),
            participants: self
                .attendees
                .iter()
                .map(|&i| participants[i].name.clone())
                .collect(),
        };
        trace!(
            day = %day,
            range = %window.time_range(),
            count = window.available_count(),
            "closed meeting window"
        );
        window
    }
}

/// Find every meeting window shared by at least two participants, best first.
///
/// Windows are sorted by attendee count, descending. Equal counts keep week
/// order: earlier day first, then earlier start.
///
/// Fewer than two participants always yields an empty list.
pub fn find_meeting_options(participants: &[Participant]) -> Vec<MeetingWindow> {
    if participants.len() < MIN_ATTENDEES {
        debug!(
            participants = participants.len(),
            "not enough participants for a meeting"
        );
        return Vec::new();
    }

    let mut windows = Vec::new();
    for day in Weekday::ALL {
        collect_day(day, participants, &mut windows);
    }

    windows.sort_by_key(|w| (Reverse(w.available_count()), w.day, w.start));

    debug!(
        participants = participants.len(),
        windows = windows.len(),
        "aggregated meeting options"
    );
    windows
}

fn collect_day(day: Weekday, participants: &[Participant], out: &mut Vec<MeetingWindow>) {
    let candidates: BTreeSet<TimeSlot> = participants
        .iter()
        .flat_map(|p| p.availability.slots(day))
        .collect();

    let mut open: Option<OpenWindow> = None;

    // BTreeSet iterates in ascending hour order, which the merge relies on.
    for slot in candidates {
        let attendees: Vec<usize> = participants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.availability.is_available(day, slot))
            .map(|(i, _)| i)
            .collect();

        if attendees.len() < MIN_ATTENDEES {
            continue;
        }

        let extends = open
            .as_ref()
            .is_some_and(|w| w.extends_with(slot, &attendees));

        if extends {
            if let Some(w) = open.as_mut() {
                w.last = slot;
            }
        } else if let Some(done) = open.replace(OpenWindow {
            start: slot,
            last: slot,
            attendees,
        }) {
            out.push(done.close(day, participants));
        }
    }

    if let Some(done) = open {
        out.push(done.close(day, participants));
    }
}
