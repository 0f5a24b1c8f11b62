//! Match analysis endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use valorant_core::{analyze, MatchAnalysis};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub map: String,
    #[serde(default)]
    pub team_agents: Vec<String>,
    #[serde(default)]
    pub enemy_agents: Vec<String>,
}

pub async fn analyze_match(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<MatchAnalysis> {
    Json(analyze(
        &state.catalog,
        &req.map,
        &req.team_agents,
        &req.enemy_agents,
    ))
}
