// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sport-Swipe API Server
//!
//! Serves the sport deck and persists each user's like/dislike decisions.

use sport_swipe::{
    config::{Config, StoreBackend},
    db::{DecisionStore, FirestoreDb, MemoryStore},
    services::{CatalogClient, SportCatalog},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Sport-Swipe API");

    // Initialize decision store
    let store: Arc<dyn DecisionStore> = match config.store_backend {
        StoreBackend::Firestore => Arc::new(FirestoreDb::new(&config.gcp_project_id).await?),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory decision store; decisions are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Load the sport catalog once; a failed fetch leaves the deck empty.
    tracing::info!(url = %config.catalog_url, "Fetching sport catalog");
    let catalog = match CatalogClient::new(config.catalog_url.clone(), config.catalog_timeout)?
        .fetch()
        .await
    {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load sport catalog, serving an empty deck");
            SportCatalog::empty()
        }
    };
    tracing::info!(count = catalog.len(), "Sport catalog ready");

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store, catalog));

    // Build router
    let app = sport_swipe::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sport_swipe=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
