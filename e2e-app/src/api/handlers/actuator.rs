/*
 * Responsibility
 * - GET /actuator/health (platform の liveness probe 用)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "UP"})))
}
