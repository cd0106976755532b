//! Property-based tests for meeting-window aggregation using proptest.
//!
//! These check invariants that must hold for *any* set of weekly grids, not
//! just the hand-written scenarios in `aggregator_tests.rs`.

use huddle_engine::{
    find_meeting_options, AvailabilityGrid, MeetingWindow, Participant, TimeSlot, Weekday,
    MIN_ATTENDEES,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    (0usize..7).prop_map(|i| Weekday::ALL[i])
}

fn arb_slot() -> impl Strategy<Value = TimeSlot> {
    (0u8..24).prop_map(|h| TimeSlot::new(h).unwrap())
}

/// A grid with up to 40 (day, slot) marks, duplicates included.
fn arb_grid() -> impl Strategy<Value = AvailabilityGrid> {
    prop::collection::vec((arb_weekday(), arb_slot()), 0..40)
        .prop_map(|marks| marks.into_iter().collect())
}

/// Up to 6 participants with distinct names.
fn arb_participants() -> impl Strategy<Value = Vec<Participant>> {
    prop::collection::vec(arb_grid(), 0..6).prop_map(|grids| {
        grids
            .into_iter()
            .enumerate()
            .map(|(i, grid)| Participant::new(format!("p{}", i), grid))
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Names of everyone free at `hour` on `day`, in input order.
fn available_at(participants: &[Participant], day: Weekday, hour: u8) -> Vec<String> {
    let Ok(slot) = TimeSlot::new(hour) else {
        return Vec::new();
    };
    participants
        .iter()
        .filter(|p| p.availability.is_available(day, slot))
        .map(|p| p.name.clone())
        .collect()
}

fn hours(window: &MeetingWindow) -> std::ops::Range<u8> {
    window.start_hour()..window.end_hour
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Fewer than two participants never produce a window.
    #[test]
    fn fewer_than_two_participants_is_empty(grid in arb_grid(), take_one in any::<bool>()) {
        let people: Vec<Participant> = if take_one {
            vec![Participant::new("solo", grid)]
        } else {
            Vec::new()
        };
        prop_assert!(find_meeting_options(&people).is_empty());
    }

    /// Every window has at least two attendees.
    #[test]
    fn every_window_has_two_or_more(people in arb_participants()) {
        for w in find_meeting_options(&people) {
            prop_assert!(w.available_count() >= MIN_ATTENDEES);
        }
    }

    /// The reported attendees are free at every hour of the window, and
    /// nobody else is.
    #[test]
    fn window_set_holds_at_every_hour(people in arb_participants()) {
        for w in find_meeting_options(&people) {
            for hour in hours(&w) {
                prop_assert_eq!(&available_at(&people, w.day, hour), &w.participants);
            }
        }
    }

    /// Windows cannot be extended: the neighbouring hour on either side has
    /// a different attendee set (or is off the grid).
    #[test]
    fn windows_are_maximal(people in arb_participants()) {
        for w in find_meeting_options(&people) {
            if let Some(before) = w.start_hour().checked_sub(1) {
                prop_assert_ne!(&available_at(&people, w.day, before), &w.participants);
            }
            if w.end_hour < 24 {
                prop_assert_ne!(&available_at(&people, w.day, w.end_hour), &w.participants);
            }
        }
    }

    /// Every qualifying (day, hour) lies in exactly one window.
    #[test]
    fn windows_tile_the_qualifying_slots(people in arb_participants()) {
        let windows = find_meeting_options(&people);
        if people.len() >= MIN_ATTENDEES {
            for day in Weekday::ALL {
                for hour in 0u8..24 {
                    let qualifies = available_at(&people, day, hour).len() >= MIN_ATTENDEES;
                    let slot = TimeSlot::new(hour).unwrap();
                    let covering = windows
                        .iter()
                        .filter(|w| w.day == day && w.covers(slot))
                        .count();
                    prop_assert_eq!(covering, usize::from(qualifies));
                }
            }
        }
    }

    /// Sorted by count descending; ties in week order.
    #[test]
    fn ranked_by_count_then_week_order(people in arb_participants()) {
        let windows = find_meeting_options(&people);
        for pair in windows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.available_count() >= b.available_count());
            if a.available_count() == b.available_count() {
                prop_assert!((a.day, a.start) < (b.day, b.start));
            }
        }
    }

    /// Same input, same output.
    #[test]
    fn aggregation_is_idempotent(people in arb_participants()) {
        prop_assert_eq!(find_meeting_options(&people), find_meeting_options(&people));
    }

    /// Input order of participants does not change which windows exist.
    #[test]
    fn participant_order_does_not_change_windows(people in arb_participants()) {
        let mut reversed = people.clone();
        reversed.reverse();

        let key = |w: &MeetingWindow| {
            let mut names = w.participants.clone();
            names.sort();
            (w.day, w.start_hour(), w.end_hour, names)
        };
        let mut forward: Vec<_> = find_meeting_options(&people).iter().map(key).collect();
        let mut backward: Vec<_> = find_meeting_options(&reversed).iter().map(key).collect();
        forward.sort();
        backward.sort();
        prop_assert_eq!(forward, backward);
    }
}
