//! HTTP route handlers for the demo API.
//!
//! Four routes plus a JSON 404 fallback. Nothing this service returns may be
//! cached - orchestrator probes and deployment smoke tests must observe the
//! live process - so every response carries `Cache-Control: no-store`.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod echo;
pub mod health;
pub mod info;
pub mod root;

use axum::{
    http::{Method, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{SecondsFormat, Utc};
use http::header::{HeaderValue, CACHE_CONTROL};
use serde_json::json;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Current time as an ISO-8601 UTC string with millisecond precision.
///
/// Shared by every response payload that carries a timestamp.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fallback for any method+path pair with no registered handler.
///
/// The method is not validated separately from the path: `DELETE /` produces
/// the same structured 404 as `GET /nonexistent`.
async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "path": uri.path(),
            "method": method.as_str(),
            "timestamp": iso_timestamp(),
        })),
    )
}

/// Creates the Axum router with all routes, the no-store cache policy, and
/// the request ID middleware.
pub fn create_router(state: AppState) -> Router {
    // Each method router falls back to the same 404 handler: a known path
    // with the wrong method is indistinguishable from an unknown path.
    Router::new()
        .route("/", get(root::index).fallback(not_found))
        .route("/health", get(health::health).fallback(not_found))
        .route("/api/info", get(info::info).fallback(not_found))
        .route("/api/echo", post(echo::echo).fallback(not_found))
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
