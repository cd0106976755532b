//! Error types for huddle-engine operations.
//!
//! Only the label codec and the wire decoder can fail. Aggregation itself is
//! total and never returns an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuddleError {
    #[error("Invalid time label '{label}': {reason}")]
    InvalidTimeLabel { label: String, reason: String },

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Hour {0} is outside the 0-23 slot grid")]
    InvalidHour(u8),

    /// A label or day error, tagged with the participant whose grid held it.
    #[error("Invalid availability for {name}: {source}")]
    Participant {
        name: String,
        #[source]
        source: Box<HuddleError>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HuddleError>;
