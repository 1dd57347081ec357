//! Application error type and the catch-all response boundary.
//!
//! Handlers return `Result<_, AppError>`; the `IntoResponse` impl converts
//! any propagated failure into the structured 500 body and writes the error
//! to the log. The error text is echoed to the caller - a known information
//! disclosure this deployment demo keeps for debuggability.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::routes::iso_timestamp;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to parse request body: {0}")]
    BodyParse(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = json!({
            "error": "Internal Server Error",
            "message": self.to_string(),
            "timestamp": iso_timestamp(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
