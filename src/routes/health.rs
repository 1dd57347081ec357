//! Health check endpoint for container orchestration.
//!
//! Liveness probe used by the platform's load balancer to decide whether the
//! container keeps receiving traffic. It reports "healthy" whenever the
//! process can answer HTTP at all; no deeper evaluation is performed. That is
//! a documented limitation of this demo, not a check waiting to be written.

use axum::{extract::State, response::Json};
use serde::Serialize;
use tracing::instrument;

use super::iso_timestamp;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Process uptime in seconds
    pub uptime: f64,
    pub hostname: String,
    pub platform: &'static str,
    pub runtime_version: String,
}

/// Health check handler. Always reports "healthy" with HTTP 200.
#[instrument(name = "health::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: iso_timestamp(),
        uptime: state.system.uptime_secs(),
        hostname: state.system.hostname(),
        platform: state.system.platform(),
        runtime_version: state.system.runtime_version(),
    })
}
