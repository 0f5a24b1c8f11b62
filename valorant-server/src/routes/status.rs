//! Status endpoint - liveness plus the size of the loaded catalog

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct CatalogSize {
    pub agents: usize,
    pub maps: usize,
    pub tips: usize,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: CatalogSize,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    let catalog = &state.catalog;
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog: CatalogSize {
            agents: catalog.list_agents().len(),
            maps: catalog.list_maps().len(),
            tips: catalog.tip_count(),
        },
    })
}
