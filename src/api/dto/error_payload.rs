//! Uniform error body for the fixed client-facing error statuses.
//!
//! A payload is built by one factory per status and renders itself with that
//! same status, so `errorCode` always equals the HTTP status it travels in.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    message: String,
    error_code: u16,
    timestamp: i64,
}

impl ErrorPayload {
    fn with_status(status: StatusCode, message: impl Into<String>, timestamp: i64) -> Self {
        Self {
            message: message.into(),
            error_code: status.as_u16(),
            timestamp,
        }
    }

    /// 400
    pub fn bad_request(message: impl Into<String>, timestamp: i64) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message, timestamp)
    }

    /// 403
    pub fn forbidden(message: impl Into<String>, timestamp: i64) -> Self {
        Self::with_status(StatusCode::FORBIDDEN, message, timestamp)
    }

    /// 404
    pub fn not_found(message: impl Into<String>, timestamp: i64) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, message, timestamp)
    }

    /// 500
    pub fn internal_error(message: impl Into<String>, timestamp: i64) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, message, timestamp)
    }

    /// 503
    pub fn service_unavailable(message: impl Into<String>, timestamp: i64) -> Self {
        Self::with_status(StatusCode::SERVICE_UNAVAILABLE, message, timestamp)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_code(&self) -> u16 {
        self.error_code
    }

    /// Epoch milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn status(&self) -> StatusCode {
        // error_code only ever comes from a StatusCode in with_status.
        StatusCode::from_u16(self.error_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorPayload {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn each_factory_carries_its_status() {
        let cases = [
            (ErrorPayload::bad_request("m", 1), StatusCode::BAD_REQUEST),
            (ErrorPayload::forbidden("m", 1), StatusCode::FORBIDDEN),
            (ErrorPayload::not_found("m", 1), StatusCode::NOT_FOUND),
            (
                ErrorPayload::internal_error("m", 1),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ErrorPayload::service_unavailable("m", 1),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (payload, status) in cases {
            assert_eq!(payload.error_code(), status.as_u16());
            assert_eq!(payload.status(), status);
        }
    }

    #[test]
    fn message_is_taken_verbatim() {
        let payload = ErrorPayload::not_found("", 7);
        assert_eq!(payload.message(), "");
        assert_eq!(payload.timestamp(), 7);
    }

    #[test]
    fn serializes_camel_case() {
        let payload =
            ErrorPayload::service_unavailable("Service is not available", 1_760_000_000_000);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "message": "Service is not available",
                "errorCode": 503,
                "timestamp": 1_760_000_000_000_i64,
            })
        );
    }

    #[test]
    fn response_status_matches_error_code() {
        let response = ErrorPayload::forbidden("Not allow to this resource", 0).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
