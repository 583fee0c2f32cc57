//! Group availability records by candidate slot.
//!
//! The index maps each slot identifier to the users who reported availability
//! for it, in submission order. It is the first half of a recommendation: the
//! selector in [`crate::recommend`] scans an event's slots against it.

use std::collections::{HashMap, HashSet};

use crate::types::{Availability, SlotId, UserId};

/// Build the slot → users index from a flat list of availability records.
///
/// Records are grouped by `slot_id` in input order. With `dedupe` set, repeat
/// submissions by the same user for the same slot are dropped (first
/// occurrence kept); without it every record is appended, so a user who
/// submits twice counts twice toward that slot's attendance.
///
/// The caller guarantees all records belong to a single event; nothing here
/// filters by `event_id`. An empty input yields an empty map.
pub fn build_slot_index(
    availabilities: &[Availability],
    dedupe: bool,
) -> HashMap<SlotId, Vec<UserId>> {
    let mut index: HashMap<SlotId, Vec<UserId>> = HashMap::new();
    let mut seen: HashSet<(SlotId, UserId)> = HashSet::new();

    for record in availabilities {
        if dedupe && !seen.insert((record.slot_id.clone(), record.user_id.clone())) {
            continue;
        }
        index
            .entry(record.slot_id.clone())
            .or_default()
            .push(record.user_id.clone());
    }

    index
}
