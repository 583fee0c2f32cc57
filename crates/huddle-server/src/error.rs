//! Rejection handling and the error wire shape.
//!
//! Every failure surfaces as `{"error": "..."}` JSON with an appropriate
//! status code. The engine itself never fails; everything here originates in
//! the plumbing: unknown identifiers, malformed bodies, unmatched routes.

use std::convert::Infallible;

use serde::Serialize;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::store::StoreError;

impl warp::reject::Reject for StoreError {}

/// Lift a store failure into a warp rejection.
pub fn reject(err: StoreError) -> Rejection {
    warp::reject::custom(err)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Map rejections to the JSON error shape.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if let Some(store_err) = err.find::<StoreError>() {
        (StatusCode::NOT_FOUND, store_err.to_string())
    } else if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, body_err.to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "payload too large".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed".to_string(),
        )
    } else {
        tracing::error!(?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    };

    let body = warp::reply::json(&ErrorBody { error: message });
    Ok(warp::reply::with_status(body, status))
}
