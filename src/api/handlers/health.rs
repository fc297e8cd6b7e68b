/*
 * Responsibility
 * - GET /api/health (liveness, JSON)
 * - GET /api/status, GET /api/health/status (plain text)
 */
use axum::{Json, extract::State};

use crate::{api::dto::HealthResponse, services::assembler, state::AppState};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(assembler::health(&state.clock.now(), &state.identity))
}

pub async fn status() -> &'static str {
    assembler::status()
}

pub async fn health_status(State(state): State<AppState>) -> String {
    assembler::health_status(&state.clock.now())
}
