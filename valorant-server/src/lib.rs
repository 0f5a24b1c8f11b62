//! Valorant Server - HTTP API over the recommendation engine
//!
//! This crate provides the web backend:
//! - Agent and map listings
//! - Match analysis
//! - Pick suggestions
//! - Composition randomizer

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use valorant_core::Catalog;

pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: [u8; 4],
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: [0, 0, 0, 0],
            port: 3000,
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Catalog
        .route("/api/agents", get(routes::catalog::get_agents))
        .route("/api/maps", get(routes::catalog::get_maps))
        // Engine
        .route("/api/analyze", post(routes::analyze::analyze_match))
        .route("/api/suggest", post(routes::suggest::suggest_agents))
        .route("/api/randomize", post(routes::randomize::randomize_composition))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig, catalog: Catalog) -> anyhow::Result<()> {
    let addr = SocketAddr::from((config.host, config.port));
    let state = Arc::new(ServerState::new(catalog));
    let router = create_router(state);

    tracing::info!("Valorant server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
