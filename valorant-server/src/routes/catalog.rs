//! Agent and map listings

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use valorant_core::Role;

/// Agent summary for the UI
#[derive(Serialize)]
pub struct AgentInfo {
    pub name: String,
    pub role: Role,
}

/// List all agents in catalog order
pub async fn get_agents(State(state): State<Arc<ServerState>>) -> Json<Vec<AgentInfo>> {
    let agents = state
        .catalog
        .list_agents()
        .iter()
        .map(|a| AgentInfo {
            name: a.name.clone(),
            role: a.role,
        })
        .collect();
    Json(agents)
}

/// List all map names in catalog order
pub async fn get_maps(State(state): State<Arc<ServerState>>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .list_maps()
            .iter()
            .map(|m| m.name.clone())
            .collect(),
    )
}
