//! Composition randomizer endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use valorant_core::Composition;

#[derive(Default, Deserialize)]
pub struct RandomizeRequest {
    pub map: Option<String>,
}

/// The body is optional; without one a random map is chosen
pub async fn randomize_composition(
    State(state): State<Arc<ServerState>>,
    body: Option<Json<RandomizeRequest>>,
) -> Json<Composition> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    Json(state.randomize(req.map.as_deref()))
}
