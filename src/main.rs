// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::clock::SystemClock;
use crate::application::dashboard_service::DashboardService;
use crate::application::random_source::{ChaChaSource, RandomSource};
use crate::application::refresh_timer::spawn_refresh_timer;
use crate::infrastructure::config::load_dashboard_config;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Random source: seeded runs are reproducible, the default is not
    let rng: Box<dyn RandomSource> = match config.refresh.seed {
        Some(seed) => {
            tracing::info!("Using fixed random seed {}", seed);
            Box::new(ChaChaSource::seeded(seed))
        }
        None => Box::new(ChaChaSource::from_entropy()),
    };

    // Create service (application layer); this performs the initial load
    let dashboard_service = Arc::new(DashboardService::new(
        rng,
        Arc::new(SystemClock),
        &config.refresh,
        config.charts.clone(),
    )?);

    // Periodic refresh
    let _timer = spawn_refresh_timer(dashboard_service.clone(), config.refresh.interval());

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.bind_addr;
    tracing::info!(
        "Starting business dashboard on {} (refresh every {} ms)",
        addr,
        config.refresh.interval_ms
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
