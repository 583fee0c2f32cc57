//! Request handlers wiring the HTTP surface to the store and the engine.

use std::sync::Arc;

use serde::Deserialize;
use warp::http::StatusCode;
use warp::{reply, Rejection, Reply};

use huddle_engine::{recommend, Availability, Event, EventId, RecommendOptions};

use crate::error;
use crate::store::{AvailabilityStore, EventStore};

/// Query parameters accepted by `GET /events`.
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    /// Exact-match title filter.
    pub title: Option<String>,
}

pub async fn create_event(
    event: Event,
    store: Arc<dyn EventStore>,
) -> Result<impl Reply, Rejection> {
    let created = store.insert(event);
    tracing::info!(event = %created.id, slots = created.slots.len(), "event created");
    Ok(reply::json(&created))
}

pub async fn get_event(id: String, store: Arc<dyn EventStore>) -> Result<impl Reply, Rejection> {
    let event = store.get(&EventId(id)).map_err(error::reject)?;
    Ok(reply::json(&event))
}

pub async fn list_events(
    query: ListEventsQuery,
    store: Arc<dyn EventStore>,
) -> Result<impl Reply, Rejection> {
    let events = store.list(query.title.as_deref());
    Ok(reply::json(&events))
}

pub async fn update_event(
    id: String,
    event: Event,
    store: Arc<dyn EventStore>,
) -> Result<impl Reply, Rejection> {
    let updated = store.update(&EventId(id), event).map_err(error::reject)?;
    Ok(reply::json(&updated))
}

pub async fn delete_event(id: String, store: Arc<dyn EventStore>) -> Result<impl Reply, Rejection> {
    store.delete(&EventId(id.clone())).map_err(error::reject)?;
    tracing::info!(event = %id, "event deleted");
    Ok(reply::with_status(reply::reply(), StatusCode::NO_CONTENT))
}

pub async fn add_availability(
    availability: Availability,
    store: Arc<dyn AvailabilityStore>,
) -> Result<impl Reply, Rejection> {
    // The referenced event and slot are taken on trust; a submission against
    // a slot that later disappears becomes an orphan record, which the engine
    // documents rather than rejects.
    let created = store.insert(availability);
    tracing::info!(
        availability = %created.id,
        event = %created.event_id,
        user = %created.user_id,
        "availability recorded"
    );
    Ok(reply::json(&created))
}

pub async fn list_availability_for_event(
    event_id: String,
    store: Arc<dyn AvailabilityStore>,
) -> Result<impl Reply, Rejection> {
    let availabilities = store.list_for_event(&EventId(event_id));
    Ok(reply::json(&availabilities))
}

pub async fn update_availability(
    id: String,
    availability: Availability,
    store: Arc<dyn AvailabilityStore>,
) -> Result<impl Reply, Rejection> {
    let updated = store.update(&id, availability).map_err(error::reject)?;
    Ok(reply::json(&updated))
}

pub async fn delete_availability(
    id: String,
    store: Arc<dyn AvailabilityStore>,
) -> Result<impl Reply, Rejection> {
    store.delete(&id).map_err(error::reject)?;
    Ok(reply::with_status(reply::reply(), StatusCode::NO_CONTENT))
}

pub async fn recommend_slots(
    event_id: String,
    events: Arc<dyn EventStore>,
    availabilities: Arc<dyn AvailabilityStore>,
    options: RecommendOptions,
) -> Result<impl Reply, Rejection> {
    let event = events.get(&EventId(event_id)).map_err(error::reject)?;
    let records = availabilities.list_for_event(&event.id);

    let recommendation = recommend(&event, &records, options);
    tracing::debug!(
        event = %event.id,
        submissions = records.len(),
        ideal_slots = recommendation.ideal_slots.len(),
        "recommendation computed"
    );
    Ok(reply::json(&recommendation))
}
