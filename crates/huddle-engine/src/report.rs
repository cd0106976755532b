//! Ranked windows together with the size of the room they were computed for.
//!
//! The aggregator reports only who can attend; a presentation layer also
//! needs the total to render "3/4 available" and to highlight windows the
//! whole room can make.

use serde::Serialize;

use crate::aggregator::{find_meeting_options, MeetingWindow};
use crate::grid::Participant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingReport {
    pub total_participants: usize,
    #[serde(rename = "options")]
    pub windows: Vec<MeetingWindow>,
}

impl MeetingReport {
    /// The top-ranked window, if any slot is shared at all.
    pub fn best(&self) -> Option<&MeetingWindow> {
        self.windows.first()
    }

    /// Windows that every participant can attend.
    pub fn full_attendance(&self) -> impl Iterator<Item = &MeetingWindow> + '_ {
        self.windows
            .iter()
            .filter(move |w| w.is_full_attendance(self.total_participants))
    }

    /// Keep only the `limit` best windows.
    pub fn truncate(&mut self, limit: usize) {
        self.windows.truncate(limit);
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Aggregate `participants` and record how many were considered.
pub fn summarize(participants: &[Participant]) -> MeetingReport {
    MeetingReport {
        total_participants: participants.len(),
        windows: find_meeting_options(participants),
    }
}
