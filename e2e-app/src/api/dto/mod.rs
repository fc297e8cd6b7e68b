pub mod health;
pub mod info;

pub use health::{HealthResponse, HealthStatus};
pub use info::InfoResponse;
