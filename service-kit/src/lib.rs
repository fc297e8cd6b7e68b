//! Plumbing shared by the mock services.
//!
//! Everything here is transport or process level: environment mode, tracing,
//! HTTP middleware and the clock handlers read from. Route handlers and
//! payload shapes live in each service crate.
pub mod clock;
pub mod env;
pub mod format;
pub mod identity;
pub mod middleware;
pub mod telemetry;

pub use clock::{MonotonicClock, SystemZone};
pub use env::{AppEnv, ConfigError};
pub use identity::ServiceIdentity;
pub use middleware::HttpSettings;
