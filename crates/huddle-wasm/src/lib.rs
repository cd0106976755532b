//! WASM bindings for huddle-engine.
//!
//! Exposes meeting-window aggregation and the slot label codec to the browser
//! via `wasm-bindgen`. Participants and reports cross the boundary as JSON
//! strings in the same shape the availability store already produces.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p huddle-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/huddle_wasm.wasm
//! ```

use huddle_engine::error::Result;
use huddle_engine::{format_hour, parse_participants, summarize, LabelPolicy, TimeSlot};
use wasm_bindgen::prelude::*;

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn meeting_options_json(participants_json: &str, skip_invalid: bool) -> Result<String> {
    let policy = if skip_invalid {
        LabelPolicy::Skip
    } else {
        LabelPolicy::Strict
    };
    let participants = parse_participants(participants_json, policy)?;
    Ok(serde_json::to_string(&summarize(&participants))?)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Rank meeting windows for a room.
///
/// `participants_json` is an array of `{name, availability}` objects where
/// `availability` maps day names to `"H:MM AM|PM"` labels. Returns the report
/// as `{totalParticipants, options: [{day, timeRange, startHour, endHour,
/// availableParticipants, availableCount}]}`.
///
/// With `skip_invalid` unset, any unreadable day or label is an error.
#[wasm_bindgen(js_name = "findMeetingOptions")]
pub fn find_meeting_options(
    participants_json: &str,
    skip_invalid: Option<bool>,
) -> std::result::Result<String, JsValue> {
    meeting_options_json(participants_json, skip_invalid.unwrap_or(false)).map_err(to_js)
}

/// Parse a slot label such as `"3:00 PM"` into its hour (15).
#[wasm_bindgen(js_name = "parseTimeLabel")]
pub fn parse_time_label(label: &str) -> std::result::Result<u8, JsValue> {
    TimeSlot::parse_label(label).map(TimeSlot::hour).map_err(to_js)
}

/// Render an hour 0-24 as a slot label; 24 renders as `"12:00 AM"`.
#[wasm_bindgen(js_name = "formatHour")]
pub fn format_hour_label(hour: u8) -> String {
    format_hour(hour)
}

/// The 24 slot labels of one grid day, as a JSON array.
#[wasm_bindgen(js_name = "slotLabels")]
pub fn slot_labels() -> String {
    let labels: Vec<String> = TimeSlot::all().map(|s| s.label()).collect();
    serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string())
}
