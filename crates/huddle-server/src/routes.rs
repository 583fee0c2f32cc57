//! The warp route table.
//!
//! | Method | Path                        | Handler                       |
//! |--------|-----------------------------|-------------------------------|
//! | POST   | /events                     | create event                  |
//! | GET    | /events?title=              | list events                   |
//! | GET    | /events/:id                 | fetch event                   |
//! | PUT    | /events/:id                 | replace event                 |
//! | DELETE | /events/:id                 | delete event                  |
//! | POST   | /availability               | record a submission           |
//! | GET    | /events/:id/availability    | list submissions for an event |
//! | PUT    | /availability/:id           | replace a submission          |
//! | DELETE | /availability/:id           | delete a submission           |
//! | GET    | /events/:id/recommend       | recommend slots               |

use std::convert::Infallible;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use warp::{Filter, Rejection, Reply};

use huddle_engine::RecommendOptions;

use crate::error;
use crate::handlers;
use crate::store::{AvailabilityStore, EventStore};

/// Hand a shared store to a handler.
fn with<T: ?Sized + Send + Sync>(
    shared: Arc<T>,
) -> impl Filter<Extract = (Arc<T>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&shared))
}

/// JSON request body, capped well above any realistic payload.
fn json_body<T: DeserializeOwned + Send>(
) -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    warp::body::content_length_limit(64 * 1024).and(warp::body::json())
}

/// Assemble the full API with rejection handling and request logging.
pub fn api(
    events: Arc<dyn EventStore>,
    availabilities: Arc<dyn AvailabilityStore>,
    options: RecommendOptions,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let recommend = warp::path!("events" / String / "recommend")
        .and(warp::get())
        .and(with(events.clone()))
        .and(with(availabilities.clone()))
        .and(warp::any().map(move || options))
        .and_then(handlers::recommend_slots);

    let event_availability = warp::path!("events" / String / "availability")
        .and(warp::get())
        .and(with(availabilities.clone()))
        .and_then(handlers::list_availability_for_event);

    let create_event = warp::path!("events")
        .and(warp::post())
        .and(json_body())
        .and(with(events.clone()))
        .and_then(handlers::create_event);

    let list_events = warp::path!("events")
        .and(warp::get())
        .and(warp::query::<handlers::ListEventsQuery>())
        .and(with(events.clone()))
        .and_then(handlers::list_events);

    let get_event = warp::path!("events" / String)
        .and(warp::get())
        .and(with(events.clone()))
        .and_then(handlers::get_event);

    let update_event = warp::path!("events" / String)
        .and(warp::put())
        .and(json_body())
        .and(with(events.clone()))
        .and_then(handlers::update_event);

    let delete_event = warp::path!("events" / String)
        .and(warp::delete())
        .and(with(events))
        .and_then(handlers::delete_event);

    let add_availability = warp::path!("availability")
        .and(warp::post())
        .and(json_body())
        .and(with(availabilities.clone()))
        .and_then(handlers::add_availability);

    let update_availability = warp::path!("availability" / String)
        .and(warp::put())
        .and(json_body())
        .and(with(availabilities.clone()))
        .and_then(handlers::update_availability);

    let delete_availability = warp::path!("availability" / String)
        .and(warp::delete())
        .and(with(availabilities))
        .and_then(handlers::delete_availability);

    recommend
        .or(event_availability)
        .or(create_event)
        .or(list_events)
        .or(get_event)
        .or(update_event)
        .or(delete_event)
        .or(add_availability)
        .or(update_availability)
        .or(delete_availability)
        .recover(error::handle_rejection)
        .with(warp::log("huddle_server::api"))
}
