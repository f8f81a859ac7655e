mod config;
mod errors;
mod matching;
mod models;
mod planning;
mod profiling;
mod reference;
mod routes;
mod state;
mod validation;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::reference::ReferenceData;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Reference data must be complete before the listener binds
    let data = ReferenceData::load_from_dir(&config.data_dir).with_context(|| {
        format!(
            "Failed to load reference data from {}",
            config.data_dir.display()
        )
    })?;
    info!(
        "Reference data loaded: {} dimensions, {} topics, {} careers",
        data.taxonomy.dimensions().len(),
        data.taxonomy.topic_count(),
        data.catalog.careers().len()
    );

    let state = AppState::new(data);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
