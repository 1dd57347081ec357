//! Echo endpoint for verifying POST plumbing through the platform.
//!
//! The request body is parsed as JSON and returned verbatim. An empty body
//! counts as an empty object; anything unparsable propagates to the 500
//! boundary - this service has no dedicated bad-request path.

use axum::{body::Bytes, extract::State, response::Json};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use super::iso_timestamp;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    pub message: &'static str,
    pub received_data: Value,
    pub timestamp: String,
    pub hostname: String,
}

/// Echo handler: returns the parsed request body unchanged.
#[instrument(name = "echo::echo", skip(state, body))]
pub async fn echo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EchoResponse>, AppError> {
    let received = if body.is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&body)?
    };

    Ok(Json(EchoResponse {
        message: "Echo response",
        received_data: received,
        timestamp: iso_timestamp(),
        hostname: state.system.hostname(),
    }))
}
