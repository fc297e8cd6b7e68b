//! HTTP-level middleware applied to every route of a service.
//!
//! Responsibility:
//! - Request-Id generation + propagation (`x-request-id`)
//! - Access logging (TraceLayer)
//! - Body size limit and global timeout
//! - Fixed security / caching response headers

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::{Request, StatusCode};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::Span;

use crate::env::ConfigError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub body_limit: usize,
}

impl HttpSettings {
    /// Default settings with a `REQUEST_TIMEOUT_SECS` override; zero would
    /// time out every request, so it is rejected.
    pub fn with_timeout_secs(secs: u64) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECS"));
        }
        Ok(Self {
            timeout: Duration::from_secs(secs),
            ..Self::default()
        })
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            body_limit: 1024 * 1024,
        }
    }
}

/// Wraps `router` with the transport layers.
pub fn apply(router: Router, settings: HttpSettings) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // Turn timeout / inner errors into plain status responses.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                tracing::error!(error = %err, "unhandled middleware error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(RequestBodyLimitLayer::new(settings.body_limit))
        .layer(TimeoutLayer::new(settings.timeout))
        .layer(TraceLayer::new_for_http().make_span_with(RequestSpan));

    security_headers(router).layer(layers)
}

/// Access-log span tagged with the request id, so log lines can be matched
/// to the `x-request-id` a pipeline run saw in the response.
#[derive(Debug, Clone, Copy)]
struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id,
        )
    }
}

fn security_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        // Every payload carries the current time.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::get;
    use tower::ServiceExt;

    fn app() -> Router {
        apply(
            Router::new().route("/ping", get(|| async { "ping" })),
            HttpSettings::default(),
        )
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert_eq!(
            HttpSettings::with_timeout_secs(0),
            Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))
        );
    }

    #[test]
    fn timeout_override_keeps_body_limit() {
        let settings = HttpSettings::with_timeout_secs(5).unwrap();
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.body_limit, HttpSettings::default().body_limit);
    }

    #[tokio::test]
    async fn generates_request_id_and_security_headers() {
        let response = app()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert!(headers.contains_key(REQUEST_ID_HEADER));
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn propagates_caller_request_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header(REQUEST_ID_HEADER, "pipeline-run-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "pipeline-run-42");
    }
}
