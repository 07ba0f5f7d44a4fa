//! Safe Config Service API Server

mod config;
mod error;
mod handlers;
mod logging;
mod middleware;
mod routes;
mod state;


use std::sync::Arc;

use anyhow::Context;
use safe_config_core::{EnvSource, ProjectPaths, Settings};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before anything else starts
    let paths = ProjectPaths::discover().context("Failed to resolve project root")?;
    let env = EnvSource::bootstrap(&paths).context("Failed to load settings")?;
    let settings = Settings::from_source(&env, &paths).context("Failed to load settings")?;
    let server = config::ServerConfig::from_env(&env)?;

    // Initialize tracing
    logging::init(&settings.logging)?;

    info!(
        "Starting Safe Config Service {} (build {})",
        settings.application.version, settings.application.build_number
    );
    info!("Database: {}", settings.database.redacted_url());
    info!(
        "Client gateway: {} (retries {}, timeout {:?})",
        settings.gateway.url,
        settings.gateway.session_max_retries,
        settings.gateway.session_timeout()
    );
    if settings.debug {
        warn!("DEBUG is enabled");
    }

    // Create application state
    let state = state::AppState::new(Arc::new(settings));

    // Build router
    let app = routes::create_router(state)?;

    // Start server
    let listener = tokio::net::TcpListener::bind((server.host.as_str(), server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", server.host, server.port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
