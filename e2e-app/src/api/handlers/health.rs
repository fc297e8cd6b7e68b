/*
 * Responsibility
 * - GET /api/health (liveness, JSON)
 * - GET /api/status (plain text + timestamp)
 */
use axum::{Json, extract::State};

use crate::{api::dto::HealthResponse, services::assembler, state::AppState};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(assembler::health(&state.clock.now(), &state.identity))
}

pub async fn status(State(state): State<AppState>) -> String {
    assembler::status(&state.clock.now())
}
