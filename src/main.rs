//! Gangway: a container-deployment demo HTTP service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file plus environment overrides, constructs the
//! system-info provider, sets up the Axum router with all routes, and starts
//! the HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gangway::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, LOG_FORMAT_JSON};
use gangway::http::start_server;
use gangway::routes::{create_router, info::ENDPOINTS};
use gangway::state::AppState;
use gangway::system::{HostSystem, SystemInfo};

/// Gangway: a demo HTTP service for validating container deployments
#[derive(Parser, Debug)]
#[command(name = "gangway", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "gangway=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Load configuration (TOML file if present, then PORT / APP_ENV overrides)
    let config = AppConfig::load(&args.config)?;

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == LOG_FORMAT_JSON {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    // System-info provider, consulted by handlers at request time
    let system: Arc<dyn SystemInfo> = Arc::new(HostSystem::new());

    tracing::info!(
        hostname = %system.hostname(),
        platform = system.platform(),
        environment = %config.app.environment,
        runtime = %system.runtime_version(),
        "Host facts"
    );

    // Log the endpoint table (the startup banner of this service)
    for endpoint in &ENDPOINTS {
        tracing::info!(
            method = endpoint.method,
            path = endpoint.path,
            description = endpoint.description,
            "Route registered"
        );
    }

    // Create application state and router
    let state = AppState::new(config.clone(), system);
    let app = create_router(state);

    // Start server (blocks until shutdown)
    start_server(app, &config).await?;

    Ok(())
}
