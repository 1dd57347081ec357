//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Start the HTTP server and block until it shuts down.
///
/// The `Handle` is created here and handed to the signal task, which closes
/// the listener on SIGTERM (gracefully) or Ctrl+C (immediately).
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;

    tracing::info!(%addr, "Starting HTTP server");

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
