//! Suggestion endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use valorant_core::{suggest, Suggestion, DEFAULT_TEAM_SIZE};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub map: String,
    #[serde(default)]
    pub picks: Vec<String>,
    pub team_size: Option<i64>,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}

pub async fn suggest_agents(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<SuggestRequest>,
) -> Json<SuggestResponse> {
    // Negative sizes mean "team already full"
    let team_size = req
        .team_size
        .map(|n| n.max(0) as usize)
        .unwrap_or(DEFAULT_TEAM_SIZE);

    Json(SuggestResponse {
        suggestions: suggest(&state.catalog, &req.map, &req.picks, team_size),
    })
}
