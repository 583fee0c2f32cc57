//! Select the candidate slot(s) with maximal attendance.
//!
//! Scans an event's slots in stored order against the availability index,
//! keeping every slot tied for the highest attendee count, then computes per
//! winning slot which known participants are absent from it. Ties are
//! resolved by inclusion: all tied slots are returned, and any further
//! tie-breaking (say, earliest start) is left to the caller.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::index::build_slot_index;
use crate::types::{Availability, Event, SlotId, TimeSlot, UserId};

/// Policy knobs for a recommendation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Drop repeat submissions of the same user for the same slot before
    /// counting. Off by default: the raw submission data decides attendee
    /// counts, matching the behavior the API has always had.
    pub dedupe_users_per_slot: bool,
}

/// The engine's answer: the slots tied for maximal attendance, and who among
/// the known participants cannot make each of them.
///
/// Wire field names are fixed by the public recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Candidate slots tied for the highest attendee count, in the event's
    /// slot order. Empty when no slot has a single attendee.
    #[serde(rename = "IdealSlots")]
    pub ideal_slots: Vec<TimeSlot>,

    /// For each ideal slot, the participants who submitted availability for
    /// the event but not for that slot. Exactly one entry per ideal slot,
    /// empty when everyone can attend.
    #[serde(rename = "NotFeasibleforUsers")]
    pub absent_by_slot: BTreeMap<SlotId, Vec<UserId>>,
}

/// Recommend the meeting slot(s) with maximal attendance.
///
/// The result is deterministic for a given input ordering, and the set of
/// ideal slots (and each absence set) is invariant under permutation of
/// `availabilities`. Every ideal slot has the same, positive attendee count,
/// which is the maximum over all of the event's slots; when every slot has
/// zero attendees the recommendation is empty rather than "all slots tied".
///
/// Records referencing a slot that is not on the event never count toward any
/// slot, but their users still count as known participants, so such a user
/// shows up as absent from every ideal slot.
pub fn recommend(
    event: &Event,
    availabilities: &[Availability],
    options: RecommendOptions,
) -> Recommendation {
    let slot_users = build_slot_index(availabilities, options.dedupe_users_per_slot);

    // Scan slots in stored order: a strictly higher count takes over the
    // accumulator, an equal positive count joins it. Zero never qualifies.
    let mut max_count = 0usize;
    let mut ideal_slots: Vec<TimeSlot> = Vec::new();
    for slot in &event.slots {
        let count = slot_users.get(&slot.id).map_or(0, Vec::len);
        if count > max_count {
            max_count = count;
            ideal_slots = vec![slot.clone()];
        } else if count == max_count && max_count > 0 {
            ideal_slots.push(slot.clone());
        }
    }

    // Every user who submitted anything for the event, in first-submission
    // order so absence lists come out deterministic.
    let mut all_users: Vec<UserId> = Vec::new();
    let mut seen: HashSet<UserId> = HashSet::new();
    for record in availabilities {
        if seen.insert(record.user_id.clone()) {
            all_users.push(record.user_id.clone());
        }
    }

    let mut absent_by_slot: BTreeMap<SlotId, Vec<UserId>> = BTreeMap::new();
    for slot in &ideal_slots {
        let present: HashSet<&UserId> = slot_users
            .get(&slot.id)
            .map(|users| users.iter().collect())
            .unwrap_or_default();
        let absent: Vec<UserId> = all_users
            .iter()
            .filter(|user| !present.contains(user))
            .cloned()
            .collect();
        absent_by_slot.insert(slot.id.clone(), absent);
    }

    Recommendation {
        ideal_slots,
        absent_by_slot,
    }
}
