//! Handler for the root endpoint: welcome message plus container facts.
//!
//! Reports the figures a deployment smoke test wants to see - where the
//! process landed (hostname), what it landed on (platform, architecture,
//! CPUs, memory), and which environment it believes it is in.

use axum::{extract::State, response::Json};
use serde::Serialize;
use tracing::instrument;

use super::iso_timestamp;
use crate::config::{APP_VERSION, WELCOME_MESSAGE};
use crate::state::AppState;
use crate::system::format_gib;

/// Container-level facts, read from the system-info provider at request time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    pub hostname: String,
    pub platform: &'static str,
    pub arch: &'static str,
    pub cpus: usize,
    pub total_memory: String,
    pub free_memory: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub container: ContainerInfo,
    pub timestamp: String,
}

/// Root endpoint handler.
#[instrument(name = "root::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<RootResponse> {
    let system = &state.system;

    Json(RootResponse {
        message: WELCOME_MESSAGE,
        version: APP_VERSION,
        environment: state.config.app.environment.clone(),
        container: ContainerInfo {
            hostname: system.hostname(),
            platform: system.platform(),
            arch: system.arch(),
            cpus: system.cpu_count(),
            total_memory: format_gib(system.total_memory()),
            free_memory: format_gib(system.free_memory()),
        },
        timestamp: iso_timestamp(),
    })
}
