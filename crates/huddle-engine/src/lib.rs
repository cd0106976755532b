//! # huddle-engine
//!
//! Weekly availability aggregation for group scheduling.
//!
//! Each participant marks the one-hour slots they are free on a repeating
//! 7-day × 24-hour grid. The engine finds every stretch of consecutive slots
//! that at least two people share with an unchanging attendee set, and ranks
//! those windows by how many people can attend.
//!
//! ```rust
//! use huddle_engine::{find_meeting_options, parse_participants, LabelPolicy};
//!
//! let json = r#"[
//!   {"name": "Alice", "availability": {"Monday": ["9:00 AM", "10:00 AM"]}},
//!   {"name": "Bob",   "availability": {"Monday": ["10:00 AM", "9:00 AM"]}}
//! ]"#;
//! let participants = parse_participants(json, LabelPolicy::Strict).unwrap();
//! let windows = find_meeting_options(&participants);
//!
//! assert_eq!(windows.len(), 1);
//! assert_eq!(windows[0].time_range(), "9:00 AM - 11:00 AM");
//! assert_eq!(windows[0].participants, ["Alice", "Bob"]);
//! ```
//!
//! ## Modules
//!
//! - [`aggregator`]: participants → ranked [`MeetingWindow`]s
//! - [`report`]: windows plus room size, full-attendance queries
//! - [`grid`]: [`Participant`] and their [`AvailabilityGrid`]
//! - [`slot`]: [`TimeSlot`] and the `"H:MM AM|PM"` label codec
//! - [`weekday`]: the Sunday-first [`Weekday`] table
//! - [`wire`]: JSON decoding with a [`LabelPolicy`] for bad entries
//! - [`error`]: Error types

pub mod aggregator;
pub mod error;
pub mod grid;
pub mod report;
pub mod slot;
pub mod weekday;
pub mod wire;

pub use aggregator::{find_meeting_options, MeetingWindow, MIN_ATTENDEES};
pub use error::HuddleError;
pub use grid::{AvailabilityGrid, Participant};
pub use report::{summarize, MeetingReport};
pub use slot::{format_hour, TimeSlot};
pub use weekday::Weekday;
pub use wire::{parse_participants, LabelPolicy, WireParticipant};
