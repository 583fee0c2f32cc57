//! Storage traits and the in-memory implementation.
//!
//! Handlers only see [`EventStore`] and [`AvailabilityStore`]; the traits are
//! the seam where a durable backend would plug in. [`MemoryStore`] keeps both
//! collections in `RwLock`ed hash maps and hands out uuid identifiers on
//! insert: to created events, to each of their slots, and to availability
//! submissions.

use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use huddle_engine::{Availability, Event, EventId, SlotId};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub trait EventStore: Send + Sync {
    /// Store a new event, assigning it and its slots fresh identifiers.
    fn insert(&self, event: Event) -> Event;
    fn get(&self, id: &EventId) -> Result<Event, StoreError>;
    /// Replace the stored event wholesale, keeping the path identifier.
    fn update(&self, id: &EventId, event: Event) -> Result<Event, StoreError>;
    fn delete(&self, id: &EventId) -> Result<(), StoreError>;
    /// All events, optionally narrowed to an exact title match.
    fn list(&self, title: Option<&str>) -> Vec<Event>;
}

pub trait AvailabilityStore: Send + Sync {
    /// Store a new submission, assigning it a fresh identifier. The
    /// referenced event and slot are not validated to exist; the engine
    /// documents how orphan records behave.
    fn insert(&self, availability: Availability) -> Availability;
    fn update(&self, id: &str, availability: Availability) -> Result<Availability, StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
    fn list_for_event(&self, event_id: &EventId) -> Vec<Availability>;
}

/// Thread-safe in-memory store backing both collections.
#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<HashMap<EventId, Event>>,
    availabilities: RwLock<HashMap<String, Availability>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for MemoryStore {
    fn insert(&self, mut event: Event) -> Event {
        event.id = EventId(Uuid::new_v4().to_string());
        for slot in &mut event.slots {
            slot.id = SlotId(Uuid::new_v4().to_string());
        }
        self.events
            .write()
            .insert(event.id.clone(), event.clone());
        event
    }

    fn get(&self, id: &EventId) -> Result<Event, StoreError> {
        self.events
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("event", &id.0))
    }

    fn update(&self, id: &EventId, mut event: Event) -> Result<Event, StoreError> {
        let mut events = self.events.write();
        match events.get_mut(id) {
            Some(stored) => {
                event.id = id.clone();
                *stored = event.clone();
                Ok(event)
            }
            None => Err(StoreError::not_found("event", &id.0)),
        }
    }

    fn delete(&self, id: &EventId) -> Result<(), StoreError> {
        self.events
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("event", &id.0))
    }

    fn list(&self, title: Option<&str>) -> Vec<Event> {
        let events = self.events.read();
        let mut matching: Vec<Event> = events
            .values()
            .filter(|event| title.is_none_or(|t| event.title == t))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.id.cmp(&b.id));
        matching
    }
}

impl AvailabilityStore for MemoryStore {
    fn insert(&self, mut availability: Availability) -> Availability {
        availability.id = Uuid::new_v4().to_string();
        self.availabilities
            .write()
            .insert(availability.id.clone(), availability.clone());
        availability
    }

    fn update(&self, id: &str, mut availability: Availability) -> Result<Availability, StoreError> {
        let mut availabilities = self.availabilities.write();
        match availabilities.get_mut(id) {
            Some(stored) => {
                availability.id = id.to_string();
                *stored = availability.clone();
                Ok(availability)
            }
            None => Err(StoreError::not_found("availability", id)),
        }
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.availabilities
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("availability", id))
    }

    fn list_for_event(&self, event_id: &EventId) -> Vec<Availability> {
        let availabilities = self.availabilities.read();
        let mut matching: Vec<Availability> = availabilities
            .values()
            .filter(|a| &a.event_id == event_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.id.cmp(&b.id));
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use huddle_engine::{TimeSlot, UserId};

    fn draft_event() -> Event {
        Event {
            id: EventId::default(),
            title: "Planning".to_string(),
            estimated_mins: 30,
            slots: vec![TimeSlot {
                id: SlotId::default(),
                start_time: Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap(),
                end_time: Utc.with_ymd_and_hms(2026, 5, 4, 9, 30, 0).unwrap(),
            }],
        }
    }

    fn draft_availability(event_id: &EventId) -> Availability {
        Availability {
            id: String::new(),
            event_id: event_id.clone(),
            slot_id: SlotId("s1".to_string()),
            user_id: UserId("u1".to_string()),
        }
    }

    #[test]
    fn insert_assigns_event_and_slot_ids() {
        let store = MemoryStore::new();
        let created = EventStore::insert(&store, draft_event());

        assert!(!created.id.0.is_empty());
        assert!(created.slots.iter().all(|s| !s.id.0.is_empty()));
        assert_eq!(store.get(&created.id).unwrap(), created);
    }

    #[test]
    fn update_keeps_the_path_id() {
        let store = MemoryStore::new();
        let created = EventStore::insert(&store, draft_event());

        let mut replacement = draft_event();
        replacement.title = "Replanned".to_string();
        let updated = EventStore::update(&store, &created.id, replacement).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(&created.id).unwrap().title, "Replanned");
    }

    #[test]
    fn missing_event_is_not_found() {
        let store = MemoryStore::new();
        let id = EventId("missing".to_string());

        assert!(matches!(
            store.get(&id),
            Err(StoreError::NotFound { kind: "event", .. })
        ));
        assert!(EventStore::update(&store, &id, draft_event()).is_err());
        assert!(EventStore::delete(&store, &id).is_err());
    }

    #[test]
    fn list_filters_by_exact_title() {
        let store = MemoryStore::new();
        EventStore::insert(&store, draft_event());
        let mut other = draft_event();
        other.title = "Retro".to_string();
        EventStore::insert(&store, other);

        assert_eq!(store.list(None).len(), 2);
        assert_eq!(store.list(Some("Retro")).len(), 1);
        assert!(store.list(Some("retro")).is_empty());
    }

    #[test]
    fn availabilities_are_scoped_to_their_event() {
        let store = MemoryStore::new();
        let event_a = EventId("evt-a".to_string());
        let event_b = EventId("evt-b".to_string());

        AvailabilityStore::insert(&store, draft_availability(&event_a));
        AvailabilityStore::insert(&store, draft_availability(&event_a));
        AvailabilityStore::insert(&store, draft_availability(&event_b));

        assert_eq!(store.list_for_event(&event_a).len(), 2);
        assert_eq!(store.list_for_event(&event_b).len(), 1);
        assert!(store.list_for_event(&EventId("evt-c".to_string())).is_empty());
    }

    #[test]
    fn availability_delete_then_update_is_not_found() {
        let store = MemoryStore::new();
        let created = AvailabilityStore::insert(&store, draft_availability(&EventId("e".into())));

        AvailabilityStore::delete(&store, &created.id).unwrap();
        assert!(AvailabilityStore::delete(&store, &created.id).is_err());
        assert!(
            AvailabilityStore::update(&store, &created.id, draft_availability(&EventId("e".into())))
                .is_err()
        );
    }
}
