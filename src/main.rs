//! Pollcast server entry point.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use pollcast::adapters::http::{app_router, PresentationAppState};
use pollcast::adapters::postgres::{ensure_schema, PostgresPresentationStore};
use pollcast::adapters::upstream::HttpPresentationCreator;
use pollcast::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);
    info!(environment = ?config.server.environment, "configuration loaded");

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    info!("connected to database");

    ensure_schema(&pool).await?;
    info!("database schema ensured");

    let store = Arc::new(PostgresPresentationStore::new(pool));
    let creator = Arc::new(HttpPresentationCreator::new(
        config.upstream.base_url.clone(),
    ));
    let app = app_router(PresentationAppState::new(store, creator));

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!(host = %config.server.host, port = config.server.port, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_new(&server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
