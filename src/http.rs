//! Shared HTTP Response Plumbing
//!
//! Error bodies and the engine-response passthrough used by all three handler
//! surfaces.

use crate::solr::executor::EngineResponse;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON body returned when the gateway rejects a request or the engine
/// round trip fails.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn bad_gateway(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Forwards the engine's serialized response to the client unchanged.
pub fn forward_engine_response(engine: EngineResponse) -> Response {
    let status = StatusCode::from_u16(engine.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        [(header::CONTENT_TYPE, engine.content_type)],
        engine.body,
    )
        .into_response()
}
