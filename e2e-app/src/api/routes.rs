use axum::{Router, routing::get};

use crate::api::handlers::{actuator, greeting, health, info};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/hello", get(greeting::hello))
        .route("/api/status", get(health::status))
        .route("/api/health", get(health::health))
        .route("/api/info", get(info::info))
        .route("/actuator/health", get(actuator::health))
}
