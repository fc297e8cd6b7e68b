/*
 * Responsibility
 * - 各 endpoint の response を時刻 + ServiceIdentity から組み立てる
 */
use chrono::{DateTime, Local};
use service_kit::{ServiceIdentity, format};

use crate::api::dto::{HealthResponse, HealthStatus, InfoResponse};

pub const GREETING: &str = "Hello from OPAL E2E Test Application!";
pub const STATUS_PREFIX: &str = "Service is running smoothly. Timestamp: ";
pub const DESCRIPTION: &str = "Test application for OPAL CI/CD pipeline end-to-end testing";
pub const FRAMEWORK: &str = "axum 0.8";
pub const RUNTIME_VERSION: &str = concat!("Rust ", env!("CARGO_PKG_RUST_VERSION"));

pub fn hello() -> &'static str {
    GREETING
}

pub fn status(now: &DateTime<Local>) -> String {
    format!("{STATUS_PREFIX}{}", now.format(format::DAY_MONTH_YEAR_TIME))
}

pub fn health(now: &DateTime<Local>, identity: &ServiceIdentity) -> HealthResponse {
    HealthResponse {
        status: HealthStatus::Up,
        timestamp: now.format(format::ISO_LOCAL_DATE_TIME).to_string(),
        service_name: identity.name.clone(),
        version: identity.version.clone(),
    }
}

pub fn info(identity: &ServiceIdentity) -> InfoResponse {
    InfoResponse {
        name: identity.name.clone(),
        description: DESCRIPTION,
        version: identity.version.clone(),
        framework: FRAMEWORK,
        runtime_version: RUNTIME_VERSION,
    }
}
