pub mod error_payload;
pub mod health;
pub mod host;
pub mod info;
pub mod time;

pub use error_payload::ErrorPayload;
pub use health::{HealthResponse, HealthStatus};
pub use host::HostResponse;
pub use info::{InfoResponse, VulnerabilityList};
pub use time::TimeResponse;
