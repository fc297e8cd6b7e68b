//! OPAL end-to-end test application: a greeting, a timestamped status line,
//! liveness and build info under `/api`, plus `/actuator/health` for platform
//! probes.
pub mod api;
pub mod app;
pub mod config;
pub mod services;
pub mod state;
