/*
 * Responsibility
 * - `/status/`\* : hostname, echo 系 (ping/pong/track), 固定エラー系
 * - エラー系は ErrorPayload の factory と HTTP status を必ず一致させる
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::dto::{ErrorPayload, HostResponse},
    error::AppError,
    services::assembler,
    state::AppState,
};

pub async fn hostname(State(state): State<AppState>) -> Result<Json<HostResponse>, AppError> {
    let name = state.hostname.hostname()?;
    Ok(Json(assembler::host_info(name)))
}

pub async fn ping() -> &'static str {
    "ping"
}

pub async fn pong() -> &'static str {
    "pong"
}

pub async fn track() -> &'static str {
    "track"
}

pub async fn bad_request(State(state): State<AppState>) -> ErrorPayload {
    ErrorPayload::bad_request("Request is not proper build", state.clock.now_millis())
}

pub async fn forbidden(State(state): State<AppState>) -> ErrorPayload {
    ErrorPayload::forbidden("Not allow to this resource", state.clock.now_millis())
}

pub async fn not_found(State(state): State<AppState>) -> ErrorPayload {
    ErrorPayload::not_found("Resource not Found", state.clock.now_millis())
}

/// 404 without a body.
pub async fn empty_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub async fn internal_error(State(state): State<AppState>) -> ErrorPayload {
    ErrorPayload::internal_error("Something went wrong", state.clock.now_millis())
}

pub async fn service_unavailable(State(state): State<AppState>) -> ErrorPayload {
    ErrorPayload::service_unavailable("Service is not available", state.clock.now_millis())
}
