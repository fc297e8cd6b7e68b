use axum::{Json, extract::State};

use crate::{api::dto::TimeResponse, services::assembler, state::AppState};

pub async fn time(State(state): State<AppState>) -> Json<TimeResponse> {
    let now = state.clock.now();
    Json(assembler::time(&now, &state.zone.id_at(&now)))
}
