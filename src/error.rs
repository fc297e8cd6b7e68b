/*
 * Responsibility
 * - handler が返す AppError 定義
 * - IntoResponse 実装 (インフラ失敗は body なしの 500)
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::hostname::HostnameError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("hostname lookup failed")]
    HostLookup(#[from] HostnameError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::HostLookup(source) => {
                tracing::error!(error = %source, "hostname lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
