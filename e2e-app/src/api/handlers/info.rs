use axum::{Json, extract::State};

use crate::{api::dto::InfoResponse, services::assembler, state::AppState};

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(assembler::info(&state.identity))
}
