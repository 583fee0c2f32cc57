//! Core data model: events, candidate time slots, and availability records.
//!
//! Identifiers are opaque strings at this boundary. Generating them and
//! choosing their storage encoding belongs to the persistence layer; the
//! engine only ever compares them for equality. Availability records hold
//! flat identifier values, never live references to events or slots.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque event identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

/// Opaque slot identifier, unique within its parent event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub String);

/// Opaque participant identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One candidate interval within an event.
///
/// Identity is the `id`. `start_time < end_time` is an invariant enforced by
/// whoever creates the slot, not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// May be omitted in creation payloads; the persistence layer assigns it.
    #[serde(default)]
    pub id: SlotId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// A schedulable activity with a fixed menu of candidate time slots.
///
/// Slot ids are unique within an event. Slot order is preserved but carries
/// no meaning beyond the scan order of the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: EventId,
    pub title: String,
    pub estimated_mins: u32,
    pub slots: Vec<TimeSlot>,
}

/// One participant's declaration that they can attend a specific slot of a
/// specific event.
///
/// Nothing de-duplicates these at the model level: the same user may submit
/// several records for one slot, and a record may reference a slot that no
/// longer exists on the event. How the engine treats both cases is described
/// in [`crate::recommend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default)]
    pub id: String,
    pub event_id: EventId,
    pub slot_id: SlotId,
    pub user_id: UserId,
}
