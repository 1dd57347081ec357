//! Signal handling for the server listener.
//!
//! SIGTERM (orchestrator stop): stop accepting connections, drain in-flight
//! requests for up to 30 seconds, then exit. Ctrl+C (interactive interrupt):
//! close the listener immediately, no draining.

use std::time::Duration;

use axum_server::Handle;

/// How long SIGTERM waits for in-flight requests before forcing exit.
const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Spawn the signal listener that closes the server handle.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, shutting down immediately");
                handle.shutdown();
            }
            _ = terminate => {
                tracing::info!(
                    "Received SIGTERM, draining connections for up to {}s",
                    GRACEFUL_SHUTDOWN_TIMEOUT.as_secs()
                );
                handle.graceful_shutdown(Some(GRACEFUL_SHUTDOWN_TIMEOUT));
            }
        }
    });
}
