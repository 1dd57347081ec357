//! Static API descriptor endpoint.
//!
//! Enumerates the routes this service exposes so a deployment pipeline can
//! discover what to probe without reading the source.

use axum::response::Json;
use serde::Serialize;
use tracing::instrument;

use crate::config::{APP_DESCRIPTION, APP_NAME, APP_VERSION};

/// One row of the endpoint table advertised by `GET /api/info`.
#[derive(Debug, Clone, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// The four routes this service exposes.
pub const ENDPOINTS: [Endpoint; 4] = [
    Endpoint {
        path: "/",
        method: "GET",
        description: "Root endpoint with system info",
    },
    Endpoint {
        path: "/health",
        method: "GET",
        description: "Health check endpoint",
    },
    Endpoint {
        path: "/api/info",
        method: "GET",
        description: "API information",
    },
    Endpoint {
        path: "/api/echo",
        method: "POST",
        description: "Echo service",
    },
];

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: &'static [Endpoint],
}

/// API descriptor handler: name, version, and the endpoint table.
#[instrument(name = "info::info")]
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        app: APP_NAME,
        version: APP_VERSION,
        description: APP_DESCRIPTION,
        endpoints: &ENDPOINTS,
    })
}
