//! User Service Library
//!
//! User management over HTTP: create, list, fetch, replace and delete
//! users, plus a credential check. Passwords are hashed before they reach
//! the store and never leave the service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server, optionally reseeding the store first.
pub async fn run_server(
    config: UserServiceConfig,
    seed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;
    let state = AppState::from_database(db.clone());

    if seed {
        seed::load(&db, state.user_service.as_ref()).await?;
    }

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.service.bind_addr().parse()?;
    info!(service = %config.service.service_name, "Listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Reset the store and load the development accounts, then exit.
pub async fn run_seed(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let state = AppState::from_database(db.clone());

    let count = seed::load(&db, state.user_service.as_ref()).await?;
    info!("Seeded {} users", count);

    Ok(())
}
