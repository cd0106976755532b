//! JSON shapes exchanged with the availability store and the front end.
//!
//! Incoming participants carry day names and `"H:MM AM|PM"` labels as plain
//! strings. [`LabelPolicy`] decides whether a bad day or label aborts the
//! decode or is dropped with a warning. Outgoing windows use the camelCase
//! field names the front end renders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use crate::aggregator::MeetingWindow;
use crate::error::{HuddleError, Result};
use crate::grid::{AvailabilityGrid, Participant};
use crate::slot::TimeSlot;
use crate::weekday::Weekday;

/// What to do with a day name or time label that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Fail the whole decode on the first bad entry.
    #[default]
    Strict,
    /// Drop bad entries, logging each one.
    Skip,
}

/// A participant as stored upstream, before labels are parsed.
///
/// Unknown fields (room and user ids) are ignored. Day values stay raw JSON
/// until [`WireParticipant::into_participant`] so that a `null` day or a
/// non-string label is handled per entry instead of failing the whole array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireParticipant {
    pub name: String,
    #[serde(default)]
    pub availability: Option<BTreeMap<String, Value>>,
}

impl WireParticipant {
    /// Parse day names and labels into a typed [`Participant`].
    ///
    /// # Errors
    /// Under `LabelPolicy::Strict`, returns `HuddleError::Participant` wrapping
    /// the first `InvalidWeekday` or `InvalidTimeLabel` found.
    ///
    /// A day whose value is `null` is empty under either policy.
    pub fn into_participant(self, policy: LabelPolicy) -> Result<Participant> {
        let mut grid = AvailabilityGrid::new();

        for (day_name, value) in self.availability.unwrap_or_default() {
            let labels = match value {
                Value::Null => continue,
                Value::Array(labels) => labels,
                other => {
                    let err = HuddleError::InvalidTimeLabel {
                        label: other.to_string(),
                        reason: format!("expected a list of time labels for {}", day_name),
                    };
                    reject(&self.name, err, policy)?;
                    continue;
                }
            };

            let day = match day_name.parse::<Weekday>() {
                Ok(day) => day,
                Err(e) => {
                    reject(&self.name, e, policy)?;
                    continue;
                }
            };

            for label in labels {
                match parse_label_value(label) {
                    Ok(slot) => {
                        grid.insert(day, slot);
                    }
                    Err(e) => reject(&self.name, e, policy)?,
                }
            }
        }

        Ok(Participant::new(self.name, grid))
    }
}

fn parse_label_value(value: Value) -> Result<TimeSlot> {
    match value {
        Value::String(label) => TimeSlot::parse_label(&label),
        other => Err(HuddleError::InvalidTimeLabel {
            label: other.to_string(),
            reason: "expected a string".to_string(),
        }),
    }
}

fn reject(name: &str, err: HuddleError, policy: LabelPolicy) -> Result<()> {
    match policy {
        LabelPolicy::Strict => Err(HuddleError::Participant {
            name: name.to_string(),
            source: Box::new(err),
        }),
        LabelPolicy::Skip => {
            warn!(participant = name, error = %err, "skipping unreadable availability entry");
            Ok(())
        }
    }
}

impl TryFrom<WireParticipant> for Participant {
    type Error = HuddleError;

    fn try_from(wire: WireParticipant) -> Result<Self> {
        wire.into_participant(LabelPolicy::Strict)
    }
}

/// Decode a JSON array of participants.
///
/// # Errors
/// Returns `HuddleError::Json` for malformed JSON, and label/day errors as
/// described on [`WireParticipant::into_participant`].
pub fn parse_participants(json: &str, policy: LabelPolicy) -> Result<Vec<Participant>> {
    let wire: Vec<WireParticipant> = serde_json::from_str(json)?;
    wire.into_iter()
        .map(|p| p.into_participant(policy))
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WindowRecord<'a> {
    day: Weekday,
    time_range: String,
    start_hour: u8,
    end_hour: u8,
    available_participants: &'a [String],
    available_count: usize,
}

impl Serialize for MeetingWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        WindowRecord {
            day: self.day,
            time_range: self.time_range(),
            start_hour: self.start.hour(),
            end_hour: self.end_hour,
            available_participants: &self.participants,
            available_count: self.available_count(),
        }
        .serialize(serializer)
    }
}
