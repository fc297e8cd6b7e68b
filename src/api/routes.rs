/*
 * Responsibility
 * - URL 構造を定義 (/api, /status を nest)
 * - path の綴り (forbiden, voidnotfoud, notFound) は既存の pipeline が叩く形のまま
 */
use axum::{Router, routing::get};

use crate::api::handlers::{health, info, status, time};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .nest("/status", status_routes())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/status", get(health::health_status))
        .route("/status", get(health::status))
        .route("/info", get(info::info))
        .route("/time", get(time::time))
}

fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/hostname", get(status::hostname))
        .route("/ping", get(status::ping))
        .route("/pong", get(status::pong))
        .route("/track", get(status::track))
        .route("/badrequest", get(status::bad_request))
        .route("/forbiden", get(status::forbidden))
        .route("/notFound", get(status::not_found))
        .route("/voidnotfoud", get(status::empty_not_found))
        .route("/internalError", get(status::internal_error))
        .route("/unavailableservice", get(status::service_unavailable))
}
