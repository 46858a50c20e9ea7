//! Desk Insights Server - Office desk booking dashboard
//!
//! A Rust REST API server over the upstream desk booking service.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use desk_insights::{
    api,
    config::AppConfig,
    models::DashboardContext,
    repository::Repository,
    services::{fetcher::HttpDayFetcher, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("desk_insights={},tower_http=debug", config.logging.level).into());
    let json = config.is_json_logging();

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting Desk Insights Server v{}", env!("CARGO_PKG_VERSION"));

    let fetcher = HttpDayFetcher::new(&config.booking_api).context("Failed to build booking service client")?;
    tracing::info!("Booking service: {}", config.booking_api.url);

    // Create repository and services
    let repository = Repository::new(&config.cache);
    let services = Services::new(repository, Arc::new(fetcher));

    // Warm start from the CSV mirror
    let initial = match services.bookings.load_snapshot() {
        Ok(context) => context,
        Err(e) => {
            tracing::warn!(
                "Could not read {}: {}; starting empty",
                config.cache.bookings_csv.display(),
                e
            );
            DashboardContext::default()
        }
    };

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    // Create application state and router
    let state = AppState::new(config, services, initial);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
