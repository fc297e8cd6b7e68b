use axum::Json;

use crate::{api::dto::InfoResponse, services::assembler};

pub async fn info() -> Json<InfoResponse> {
    Json(assembler::info())
}
